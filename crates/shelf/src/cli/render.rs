use colored::Colorize;
use serde_json::Value;
use shelfapp::api::{CmdMessage, MessageLevel};
use shelfapp::error::Result;
use shelfapp::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    for product in products {
        println!("{}", format_product_row(product));
    }
}

pub(super) fn print_product_detail(product: &Product) {
    for line in format_product_detail(product) {
        println!("{}", line);
    }
}

pub(super) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per product: id, code, title, price and stock.
pub(super) fn format_product_row(product: &Product) -> String {
    let idx = format!("{:>4}. ", product.id);
    let title = truncate_to_width(&attribute(product, "title"), TITLE_WIDTH);
    let padding = TITLE_WIDTH.saturating_sub(title.width());
    format!(
        "{}{} {}{} {:>10}  {}",
        idx.yellow(),
        attribute(product, "code").cyan(),
        title.bold(),
        " ".repeat(padding),
        format_price(product),
        format!("stock: {}", attribute(product, "stock")).dimmed()
    )
}

pub(super) fn format_product_detail(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {}",
            product.id.to_string().yellow(),
            attribute(product, "title").bold()
        ),
        "--------------------------------".to_string(),
        field_line("code", &attribute(product, "code")),
        field_line("description", &attribute(product, "description")),
        field_line("price", &format_price(product)),
        field_line("thumbnail", &attribute(product, "thumbnail")),
        field_line("stock", &attribute(product, "stock")),
    ];
    for (key, value) in product.extras() {
        lines.push(field_line(key, &display_value(value)));
    }
    lines
}

/// A stored attribute as text; missing ones render as `-`.
fn attribute(product: &Product, key: &str) -> String {
    product.get(key).map_or_else(|| "-".to_string(), display_value)
}

fn field_line(key: &str, value: &str) -> String {
    format!("{} {}", format!("{:<12}", format!("{}:", key)).dimmed(), value)
}

fn format_price(product: &Product) -> String {
    match product.price() {
        Some(price) => format!("{:.2}", price),
        None => attribute(product, "price"),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shelfapp::model::NewProduct;

    fn sample() -> Product {
        NewProduct::new("Lamp", "Desk lamp", 25.5, "lamp.png", "LAMP-1", 4)
            .with_extra("category", json!("lighting"))
            .with_extra("weight", json!(1.2))
            .into_product(7)
            .unwrap()
    }

    #[test]
    fn row_contains_key_fields() {
        colored::control::set_override(false);
        let row = format_product_row(&sample());
        assert!(row.starts_with("   7. LAMP-1 Lamp"));
        assert!(row.contains("25.50"));
        assert!(row.ends_with("stock: 4"));
    }

    #[test]
    fn loosely_typed_record_still_renders() {
        colored::control::set_override(false);
        let product: Product =
            serde_json::from_value(json!({"id": 3, "title": "Odd", "price": null, "stock": 2.5}))
                .unwrap();
        let row = format_product_row(&product);
        assert!(row.starts_with("   3. - Odd"));
        assert!(row.contains("null"));
        assert!(row.ends_with("stock: 2.5"));
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a very long product title indeed", 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn wide_characters_count_double() {
        let cut = truncate_to_width("商品商品商品", 6);
        assert_eq!(cut, "商品…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn detail_lists_core_and_extra_fields() {
        colored::control::set_override(false);
        let lines = format_product_detail(&sample());
        assert_eq!(lines[0], "7 Lamp");
        assert!(lines.iter().any(|l| l.starts_with("price:") && l.ends_with("25.50")));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("category:") && l.ends_with("lighting")));
        assert!(lines.iter().any(|l| l.ends_with("1.2")));
    }

    #[test]
    fn string_values_render_unquoted() {
        assert_eq!(display_value(&json!("plain")), "plain");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
