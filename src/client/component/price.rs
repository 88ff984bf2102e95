use dioxus::prelude::*;

/// Formats rupiah with `.` thousands separators, e.g. `Rp 1.500.000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp {}", sign, grouped)
}

#[component]
pub fn Price(amount: i64, suffix: Option<&'static str>) -> Element {
    let suffix = suffix.unwrap_or_default();

    rsx!(
        span {
            class: "font-semibold",
            "{format_rupiah(amount)}"
            span { class: "text-sm font-normal opacity-70", "{suffix}" }
        }
    )
}
