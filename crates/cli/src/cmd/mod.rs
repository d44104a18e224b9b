mod quick;
mod wizard;

pub use quick::cmd_quick;
pub use wizard::{WizardOptions, WizardOutcome, cmd_wizard, run_wizard};

use starbuild_lib::descriptor::BuildWarning;
use tracing::warn;

use crate::output::print_warning;

/// Surface descriptor repairs to the user and the log.
fn report_warnings(warnings: &[BuildWarning]) {
  for warning in warnings {
    warn!(%warning, "descriptor input repaired");
    print_warning(&warning.to_string());
  }
}
