use robots_inspector::inspector::RobotsTxtSource;
use robots_inspector::robots::{self, DirectiveKind, ParseWarning};

// Modeled after the robots.txt files large sites actually serve: mixed-case
// directive names, comments, multiple groups, a stray rule before the first
// group, and sitemap lines scattered between groups.
const SITE_ROBOTS_TXT: &str = "\
# robots.txt for example.com
Disallow: /early

User-agent: *
Disallow: /admin
Disallow: /private/
Allow: /public/
Crawl-delay: 5

Sitemap: https://example.com/sitemap.xml

User-agent: Googlebot
User-agent: Googlebot-Image
Allow: /
Disallow: /*.pdf$

User-agent: Bingbot
Disallow: /temp/
Noindex: /secret

Sitemap: https://example.com/sitemap-news.xml
";

#[test]
fn parses_a_realistic_file_end_to_end() {
    let result = robots::parse(SITE_ROBOTS_TXT);

    assert_eq!(result.groups.len(), 3);
    assert_eq!(result.groups[0].agents, vec!["*"]);
    assert_eq!(
        result.groups[1].agents,
        vec!["Googlebot", "Googlebot-Image"]
    );
    assert_eq!(result.groups[2].agents, vec!["Bingbot"]);
    assert_eq!(result.groups[0].crawl_delay, Some(5.0));

    assert_eq!(
        result.sitemaps,
        vec![
            "https://example.com/sitemap.xml",
            "https://example.com/sitemap-news.xml"
        ]
    );

    // The stray rule on line 2 and the unknown directive are flagged, never
    // dropped.
    assert!(result
        .warnings
        .contains(&ParseWarning::UngroupedRule { line_number: 2 }));
    assert!(matches!(
        result.directive_at_line(2),
        Some(d) if d.kind == DirectiveKind::Disallow && d.group_id.is_none()
    ));
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, ParseWarning::UnknownDirective { name, .. } if name == "Noindex")));
}

#[test]
fn reparsing_is_structurally_identical() {
    assert_eq!(robots::parse(SITE_ROBOTS_TXT), robots::parse(SITE_ROBOTS_TXT));
}

#[test]
fn verdicts_follow_group_precedence() {
    let result = robots::parse(SITE_ROBOTS_TXT);

    // Googlebot resolves to its own group: Allow: / wins everywhere except
    // the anchored pdf rule.
    assert!(robots::evaluate(&result, "Googlebot", "/admin").unwrap().allowed);
    assert!(!robots::evaluate(&result, "googlebot", "/paper.pdf").unwrap().allowed);
    assert!(robots::evaluate(&result, "Googlebot", "/paper.pdf.html").unwrap().allowed);

    // Bingbot resolves to its own group, which says nothing about /admin.
    assert!(robots::evaluate(&result, "Bingbot", "/admin").unwrap().allowed);
    assert!(!robots::evaluate(&result, "Bingbot", "/temp/file").unwrap().allowed);

    // Everyone else falls through to the wildcard group.
    let verdict = robots::evaluate(&result, "SomeOtherBot", "/admin/page").unwrap();
    assert!(!verdict.allowed);
    assert_eq!(verdict.describe(), "Blocked by Disallow: /admin");

    let verdict = robots::evaluate(&result, "SomeOtherBot", "/public/page.html").unwrap();
    assert!(verdict.allowed);
    assert_eq!(verdict.describe(), "Allowed by Allow: /public/");
}

#[test]
fn crawl_delay_is_scoped_to_the_selected_group() {
    let result = robots::parse(SITE_ROBOTS_TXT);
    assert_eq!(robots::crawl_delay_for(&result, "SomeOtherBot"), Some(5.0));
    assert_eq!(robots::crawl_delay_for(&result, "Googlebot"), None);
}

#[test]
fn editor_supplied_content_parses_like_fetched_content() {
    let source = RobotsTxtSource::from_content(SITE_ROBOTS_TXT.to_string());
    assert_eq!(source.content(), SITE_ROBOTS_TXT);
    assert_eq!(source.parse(), robots::parse(SITE_ROBOTS_TXT));
}

#[test]
fn parse_result_serializes_to_json() {
    let result = robots::parse(SITE_ROBOTS_TXT);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json["sitemaps"][0].as_str(),
        Some("https://example.com/sitemap.xml")
    );
    assert_eq!(
        json["groups"][1]["agents"][0].as_str(),
        Some("Googlebot")
    );
    assert!(json["directives"].as_array().unwrap().len() >= 14);
}

#[test]
fn verdict_serializes_with_its_matched_rule() {
    let result = robots::parse(SITE_ROBOTS_TXT);
    let verdict = robots::evaluate(&result, "SomeOtherBot", "/admin/page").unwrap();
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["allowed"].as_bool(), Some(false));
    assert_eq!(json["matched_rule"]["pattern"].as_str(), Some("/admin"));
    assert_eq!(json["matched_rule"]["line_number"].as_u64(), Some(5));
}
