use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::domain::product_analysis::entities::ProductAnalysis;

const REPORT_STYLE: &str = r#"
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 40px; color: #333; line-height: 1.6; }
    .header { text-align: center; border-bottom: 3px solid #2196F3; padding-bottom: 20px; margin-bottom: 30px; }
    .product-image { text-align: center; margin: 20px 0; }
    .product-image img { max-width: 300px; max-height: 200px; border-radius: 8px; }
    .section { margin: 25px 0; padding: 20px; background: #f8f9fa; border-radius: 8px; border-left: 4px solid #2196F3; }
    .section h3 { color: #2196F3; margin-top: 0; font-size: 18px; }
    .tag-list { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; }
    .tag { background: #e3f2fd; padding: 4px 12px; border-radius: 16px; font-size: 14px; color: #1976d2; }
    .tag.allergen { background: #ffebee; color: #c62828; }
    .chemical-item { background: white; padding: 15px; margin: 10px 0; border-radius: 6px; border: 1px solid #e0e0e0; }
    .nutrition-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; margin-top: 15px; }
    .nutrition-item { background: white; padding: 12px; border-radius: 6px; text-align: center; border: 1px solid #e0e0e0; }
    .rating { font-size: 24px; font-weight: bold; text-align: center; padding: 15px; background: white; border-radius: 6px; }
    .rating-bar { height: 8px; background: #e0e0e0; border-radius: 4px; overflow: hidden; }
    .rating-fill { height: 100%; }
    .list-item { margin: 8px 0; padding: 8px 12px; background: white; border-radius: 4px; border-left: 3px solid #4CAF50; }
    .list-item.concern { border-left-color: #f44336; }
    .similar-product { background: white; padding: 16px; margin: 12px 0; border-radius: 8px; border-left: 4px solid #FF6B35; }
    .rating-badge { color: white; padding: 4px 8px; border-radius: 12px; font-size: 12px; font-weight: bold; }
    .footer { text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; font-size: 12px; }
"#;

/// Escapes text for interpolation into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the full analysis report as a standalone HTML document.
///
/// Output depends only on the arguments, so re-rendering the same analysis on the same day
/// yields identical bytes.
pub fn render_report_html(
    analysis: &ProductAnalysis,
    image_uri: Option<&str>,
    generated_on: NaiveDate,
) -> String {
    let mut html = String::new();
    let rating = analysis.rating();

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Product Analysis Report</title>
<style>{REPORT_STYLE}</style>
</head>
<body>
<div class="header">
<h1>Product Analysis Report</h1>
<h2>{name}</h2>
<p>Brand: {brand} | Category: {category}</p>
<p>Generated on: {date}</p>
</div>
"#,
        name = escape_html(&analysis.product_name),
        brand = escape_html(&analysis.brand),
        category = escape_html(&analysis.category),
        date = generated_on.format("%Y-%m-%d"),
    );

    if let Some(uri) = image_uri {
        let _ = writeln!(
            html,
            r#"<div class="product-image"><img src="{}" alt="Product Image" /></div>"#,
            escape_html(uri)
        );
    }

    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Health Rating</h3><div class="rating" style="color: {color};">{rating}</div><div class="rating-bar"><div class="rating-fill" style="width: {fill:.0}%; background: {color};"></div></div></div>"#,
        color = rating.band().color(),
        rating = escape_html(&analysis.health_rating),
        fill = rating.fill_ratio() * 100.0,
    );

    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Ingredients</h3><div class="tag-list">{}</div></div>"#,
        tags(&analysis.ingredients, "tag")
    );

    html.push_str(r#"<div class="section"><h3>Chemical Analysis</h3>"#);
    for chemical in &analysis.chemicals {
        let _ = write!(
            html,
            r#"<div class="chemical-item"><h4>{}</h4><p><strong>Purpose:</strong> {}</p><p><strong>Safety:</strong> {}</p></div>"#,
            escape_html(&chemical.name),
            escape_html(&chemical.purpose),
            escape_html(&chemical.safety)
        );
    }
    html.push_str("</div>\n");

    html.push_str(
        r#"<div class="section"><h3>Complete Nutritional Information</h3><div class="nutrition-grid">"#,
    );
    for (label, value) in analysis.nutritional_info.labeled() {
        let _ = write!(
            html,
            r#"<div class="nutrition-item"><strong>{label}</strong><br>{}</div>"#,
            escape_html(value)
        );
    }
    html.push_str("</div></div>\n");

    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Allergens</h3><div class="tag-list">{}</div></div>"#,
        tags(&analysis.allergens, "tag allergen")
    );

    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Benefits</h3>{}</div>"#,
        tags(&analysis.benefits, "list-item")
    );
    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Health Concerns</h3>{}</div>"#,
        tags(&analysis.concerns, "list-item concern")
    );

    let _ = writeln!(
        html,
        r#"<div class="section"><h3>Storage &amp; Expiry Information</h3><p><strong>Storage:</strong> {}</p><p><strong>Expiry Info:</strong> {}</p></div>"#,
        escape_html(&analysis.storage_instructions),
        escape_html(&analysis.expiry_info)
    );

    if !analysis.similar_products.is_empty() {
        html.push_str(r#"<div class="section"><h3>Healthier Alternative Recommendations</h3>"#);
        for product in &analysis.similar_products {
            let _ = write!(
                html,
                r#"<div class="similar-product"><h4>{}</h4><span class="rating-badge" style="background: {};">{}</span><p><strong>Brand:</strong> {}</p><p>{}</p></div>"#,
                escape_html(&product.name),
                product.rating().band().color(),
                escape_html(&product.health_rating),
                escape_html(&product.brand),
                escape_html(&product.key_benefit)
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str(
        r#"<div class="footer">
<p>Generated by ProductScan</p>
<p>This analysis is based on AI interpretation and should not replace professional advice</p>
</div>
</body>
</html>
"#,
    );

    html
}

fn tags(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<div class="{class}">{}</div>"#, escape_html(item)))
        .collect()
}
