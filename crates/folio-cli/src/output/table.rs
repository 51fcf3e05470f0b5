use folio_core::model::Product;

/// Plain fixed-width listing of the normalized products.
pub fn format_products(products: &[Product]) -> String {
    let mut out = String::new();

    if products.is_empty() {
        out.push_str("No product rows found.\n");
        return out;
    }

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(12)
        .max("Product".len());

    out.push_str(&format!(
        "{:<width$}  {:>8}  {}\n",
        "Product",
        "SP",
        "Product Link",
        width = name_width
    ));

    for p in products {
        let price = p.price.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:<width$}  {:>8}  {}\n",
            p.name,
            price,
            p.product_url,
            width = name_width
        ));
    }

    let with_image = products.iter().filter(|p| !p.image_url.is_empty()).count();
    out.push_str(&format!(
        "\n{} product(s), {} with an image link\n",
        products.len(),
        with_image
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_products_with_counts() {
        let products = vec![
            Product {
                name: "Widget A".into(),
                price: Some("350".into()),
                product_url: "https://shop/a".into(),
                image_url: "https://img/a.jpg".into(),
            },
            Product {
                name: "B".into(),
                price: None,
                product_url: "https://shop/b".into(),
                image_url: String::new(),
            },
        ];
        let text = format_products(&products);
        assert!(text.contains("Widget A"));
        assert!(text.contains("350"));
        assert!(text.contains("2 product(s), 1 with an image link"));
    }

    #[test]
    fn empty_table_message() {
        assert!(format_products(&[]).contains("No product rows"));
    }
}
