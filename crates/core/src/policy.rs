// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::report::ComplianceReport;

/// Whether a finished report should be handed to the notification dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryDecision {
    /// Clean report and nobody asked for it; the dispatcher is not invoked.
    Skip,
    /// Send the report.
    Send {
        /// Delivery failure should fail the run. True when violations exist.
        mandatory: bool,
    },
}

impl DeliveryDecision {
    /// Returns whether the dispatcher should be invoked.
    #[must_use]
    pub const fn should_send(&self) -> bool {
        matches!(self, Self::Send { .. })
    }

    /// Returns whether failing to deliver should fail the run.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Send { mandatory: true })
    }
}

/// Decides whether a report is sent.
///
/// Reports with violations are always sent. Clean reports are sent only when
/// `always_send` is set, so that a compliant league produces no notification
/// noise.
#[must_use]
pub const fn delivery_decision(report: &ComplianceReport, always_send: bool) -> DeliveryDecision {
    if !report.is_compliant() {
        return DeliveryDecision::Send { mandatory: true };
    }
    if always_send {
        return DeliveryDecision::Send { mandatory: false };
    }
    DeliveryDecision::Skip
}
