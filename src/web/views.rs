//! HTML rendering for the web responder. Views are plain string builders
//! kept in one module; handlers pass already-escaped-free domain values and
//! everything user-controlled goes through `escape`.

use crate::{
    models::Product,
    response::PageInfo,
    routes::params::ListingQuery,
    web::flash::Flash,
};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} | Product Catalog</title>\n</head>\n<body>\n\
         <header><h1><a href=\"/\">Product Catalog</a></h1></header>\n\
         <main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn flash_block(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => format!(
            "<p class=\"{}\">{}</p>\n",
            flash.kind.css_class(),
            escape(&flash.text)
        ),
        None => String::new(),
    }
}

pub fn index(
    products: &[Product],
    query: &ListingQuery,
    pagination: &PageInfo,
    flash: Option<&Flash>,
) -> String {
    let mut body = flash_block(flash);
    body.push_str("<p><a href=\"/products/new\">Create new product</a></p>\n");

    if products.is_empty() {
        body.push_str("<p>No products found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Code</th><th>Name</th><th>Category</th>\
             <th>Brand</th><th>Type</th><th></th></tr></thead>\n<tbody>\n",
        );
        for product in products {
            let code = escape(&product.code);
            body.push_str(&format!(
                "<tr><td><a href=\"/products/{code}\">{code}</a></td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/products/{code}/edit\">Edit</a></td></tr>\n",
                escape(&product.name),
                escape(&product.category),
                opt(&product.brand),
                opt(&product.kind),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(&format!(
        "<p>Page {} of {} ({} products)</p>\n",
        pagination.current_page, pagination.total_pages, pagination.total_count
    ));
    let mut nav = String::new();
    if pagination.current_page > 1 {
        nav.push_str(&page_link(query, pagination.current_page - 1, "Previous"));
    }
    if pagination.current_page < pagination.total_pages {
        nav.push_str(&page_link(query, pagination.current_page + 1, "Next"));
    }
    if !nav.is_empty() {
        body.push_str(&format!("<nav>{nav}</nav>\n"));
    }

    layout("Products", &body)
}

fn page_link(query: &ListingQuery, page: u64, label: &str) -> String {
    format!(
        "<a href=\"/?page={page}&amp;size={}&amp;sort={}&amp;dir={}\">{label}</a> ",
        query.size,
        query.sort.as_str(),
        query.dir.as_str(),
    )
}

pub fn show(product: &Product, flash: Option<&Flash>) -> String {
    let code = escape(&product.code);
    let body = format!(
        "{}<h2>{}</h2>\n<dl>\n<dt>Code</dt><dd>{code}</dd>\n\
         <dt>Category</dt><dd>{}</dd>\n<dt>Brand</dt><dd>{}</dd>\n\
         <dt>Type</dt><dd>{}</dd>\n<dt>Description</dt><dd>{}</dd>\n</dl>\n\
         <p><a href=\"/products/{code}/edit\">Edit</a></p>\n\
         <form method=\"post\" action=\"/products/{code}/delete\">\
         <button type=\"submit\">Delete</button></form>\n\
         <p><a href=\"/\">Back to listing</a></p>\n",
        flash_block(flash),
        escape(&product.name),
        escape(&product.category),
        opt(&product.brand),
        opt(&product.kind),
        escape(&product.description),
    );
    layout(&product.name, &body)
}

pub fn create_form(message: Option<&str>) -> String {
    let notice = message
        .map(|m| format!("<p class=\"form-error\">{}</p>\n", escape(m)))
        .unwrap_or_default();
    let body = format!(
        "<h2>Create New Product</h2>\n{notice}\
         <form method=\"post\" action=\"/products\">\n{}\
         <button type=\"submit\">Create</button>\n</form>\n",
        form_fields("", "", "", "", "", "")
    );
    layout("Create New Product", &body)
}

pub fn edit_form(product: &Product, message: Option<&str>) -> String {
    let notice = message
        .map(|m| format!("<p class=\"form-error\">{}</p>\n", escape(m)))
        .unwrap_or_default();
    let code = escape(&product.code);
    let body = format!(
        "<h2>Edit {code}</h2>\n{notice}\
         <form method=\"post\" action=\"/products/{code}\">\n{}\
         <button type=\"submit\">Save</button>\n</form>\n",
        form_fields(
            &code,
            &escape(&product.name),
            &escape(&product.category),
            &opt(&product.brand),
            &opt(&product.kind),
            &escape(&product.description),
        )
    );
    layout("Edit Product", &body)
}

fn form_fields(
    code: &str,
    name: &str,
    category: &str,
    brand: &str,
    kind: &str,
    description: &str,
) -> String {
    let code_field = if code.is_empty() {
        "<label>Code <input name=\"code\" value=\"\"></label><br>\n".to_string()
    } else {
        // Records are keyed by code; it is not editable after creation.
        format!("<label>Code <input name=\"code\" value=\"{code}\" readonly></label><br>\n")
    };
    format!(
        "{code_field}\
         <label>Name <input name=\"name\" value=\"{name}\"></label><br>\n\
         <label>Category <input name=\"category\" value=\"{category}\"></label><br>\n\
         <label>Brand <input name=\"brand\" value=\"{brand}\"></label><br>\n\
         <label>Type <input name=\"type\" value=\"{kind}\"></label><br>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label><br>\n"
    )
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h2>Something went wrong</h2>\n<p>{}</p>\n<p><a href=\"/\">Back to listing</a></p>\n",
        escape(message)
    );
    layout("Error", &body)
}
