use solid_core::adapters::outbound::messaging::{EmailService, SmsService};
use solid_core::application::services::notification::Notification;
use solid_core::config::Config;
use tracing::debug;

use crate::terminal::print;

pub fn dip(cfg: &Config) -> anyhow::Result<()> {
    print::header("dependency inversion", cfg.quiet);
    print::note("Same Notification type, different wiring.", cfg.quiet);

    let notification = Notification::new(Box::new(EmailService));
    debug!(channel = notification.channel(), "notification wired");
    print::status(notification.send_notification("Hello via Email!"));

    let notification = Notification::new(Box::new(SmsService));
    debug!(channel = notification.channel(), "notification rewired");
    print::status(notification.send_notification("Hello via SMS!"));

    Ok(())
}
