use quick_xml::escape::escape;

/// Renders `sitemap.xml`: one company page per symbol, then the investor desk.
pub fn render_sitemap<'a, I>(base_url: &str, symbols: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for symbol in symbols {
        push_url(&mut xml, &company_url(base_url, symbol));
    }
    push_url(&mut xml, &format!("{}/investor-desk", base_url));

    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        base_url
    )
}

/// Absolute URL of a company page.
pub fn company_url(base_url: &str, symbol: &str) -> String {
    format!("{}{}", base_url, company_path(symbol))
}

/// Site-relative path of a company page, with the symbol percent-encoded.
pub fn company_path(symbol: &str) -> String {
    format!("/company/{}", urlencoding::encode(symbol))
}

fn push_url(xml: &mut String, loc: &str) {
    xml.push_str("  <url>\n    <loc>");
    xml.push_str(&escape(loc));
    xml.push_str("</loc>\n  </url>\n");
}
