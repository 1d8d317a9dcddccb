/*
[INPUT]:  Terminal user
[OUTPUT]: Interactive storefront menus, starter config files, console toasts
[POS]:    CLI layer - binary-only presentation
[UPDATE]: When adding CLI screens or notification styling
*/

pub mod init;
pub mod interactive;

use console::style;
use orda_adapter::Notifier;
use rust_decimal::Decimal;
use tracing::debug;

/// Prints notifications to stdout as coloured one-liners
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str, is_error: bool) {
        debug!(title, message, is_error, "notification");
        println!("{}", render_notification(title, message, is_error));
    }
}

fn render_notification(title: &str, message: &str, is_error: bool) -> String {
    let title = if is_error {
        style(format!("[{title}]")).red().bold()
    } else {
        style(format!("[{title}]")).green().bold()
    };
    format!("{title} {message}")
}

/// Naira amount with thousands separators, e.g. `₦8,500`
pub fn naira(amount: Decimal) -> String {
    let amount = amount.round_dp(2).normalize();
    let text = amount.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}₦{grouped}.{fraction}"),
        None => format!("{sign}₦{grouped}"),
    }
}
