#![allow(dead_code)]

/// A listing page in the WordPress block-theme layout used by the site.
pub fn listing_page(posts: &[(&str, &str, &str)]) -> String {
    let items: String = posts
        .iter()
        .map(|(title, href, datetime)| {
            format!(
                r#"
<li class="wp-block-post post-1 post type-post status-publish">
  <div class="wp-block-group">
    <h2 class="wp-block-post-title has-text-align-left"><a href="{href}" target="_self">{title}</a></h2>
    <div class="wp-block-post-date"><time datetime="{datetime}">January 20, 2025</time></div>
  </div>
</li>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html><head><title>Presidential Actions</title></head>
<body><main><ul class="wp-block-post-template is-layout-flow">{items}</ul></main></body></html>"#
    )
}

pub fn empty_page() -> String {
    r#"<!DOCTYPE html><html><body><main><p>No results found.</p></main></body></html>"#.to_string()
}
