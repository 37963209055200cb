// tests/links_site.rs
//
// Local reference checks against a throwaway site tree.
//
use std::fs;
use std::path::PathBuf;

use sitecheck::config::options::LinkOptions;
use sitecheck::links::scan_site;

fn tmp_site(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sitecheck_links_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(p.join("css")).unwrap();
    fs::write(p.join("css/site.css"), "body{}").unwrap();
    p
}

#[test]
fn missing_local_assets_are_listed_once_per_file() {
    let root = tmp_site("missing");
    let index = root.join("index.html");
    fs::write(
        &index,
        r##"<link href="/css/site.css?v=3" rel=stylesheet>
<img src="img/logo.png"><img src="img/logo.png">
<a href="#top">top</a><a href="mailto:me@example.org">mail</a>
<a href="about.html#team">about</a>"##,
    )
    .unwrap();

    let opts = LinkOptions { site_root: root.clone(), ..LinkOptions::default() };
    let report = scan_site(&opts, &[index]).unwrap();

    let missing: Vec<_> = report.missing.iter().cloned().collect();
    assert_eq!(
        missing,
        vec![
            ("about.html#team".to_string(), "index.html".to_string()),
            ("img/logo.png".to_string(), "index.html".to_string()),
        ]
    );
    assert!(report.external.is_empty());
}

#[test]
fn external_urls_grouped_by_referencing_file() {
    let root = tmp_site("external");
    let mut files = Vec::new();
    for name in ["a.html", "b.html", "c.html", "d.html"] {
        let p = root.join(name);
        fs::write(&p, r#"<a href="https://example.org/x">x</a>"#).unwrap();
        files.push(p);
    }

    let opts = LinkOptions { site_root: root.clone(), ..LinkOptions::default() };
    let report = scan_site(&opts, &files).unwrap();
    assert_eq!(report.external["https://example.org/x"].len(), 4);

    let text = report.render(opts.refs_shown);
    assert!(text.contains("All local assets referenced exist."));
    assert!(text.contains("https://example.org/x  (found in: a.html, b.html, c.html,...)"));
}

#[test]
fn unreadable_file_fails_the_scan() {
    let root = tmp_site("unreadable");
    let opts = LinkOptions { site_root: root.clone(), ..LinkOptions::default() };
    let err = scan_site(&opts, &[root.join("nope.html")]).unwrap_err();
    assert!(err.to_string().contains("nope.html"));
}
