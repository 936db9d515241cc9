use regex::Regex;

use rustyll_toc::{
    attach_anchors, attach_identifiers, build_toc, normalize_html, process_html, AnchorOptions,
    Config, IdOptions, TocOptions,
};

const HEADERS_WITH_ID: &str = r#"
<h1 id="main-title">Main Title</h1>
<h2 id="introduction">Introduction</h2>
<h3 id="background">Background</h3>
<h3 id="purpose">Purpose</h3>
<h2 id="chapter-1-getting-started">Chapter 1: Getting Started</h2>
<h3 id="installation">Installation</h3>
<h4 id="windows">Windows</h4>
<h4 id="mac">Mac</h4>
<h4 id="linux">Linux</h4>
<h3 id="setup">Setup</h3>
<h4 id="configuration">Configuration</h4>
<h4 id="environment-variables">Environment Variables</h4>
<h2 id="chapter-2-advanced-topics">Chapter 2: Advanced Topics</h2>
<h3 id="deep-dive-into-components">Deep Dive into Components</h3>
<h4 id="component-a">Component A</h4>
<h5 id="sub-component-a1">Sub-component A1</h5>
<h5 id="sub-component-a2">Sub-component A2</h5>
<h4 id="component-b">Component B</h4>
<h5 id="sub-component-b1">Sub-component B1</h5>
<h5 id="sub-component-b2">Sub-component B2</h5>
<h3 id="optimization-techniques">Optimization Techniques</h3>
<h4 id="caching">Caching</h4>
<h4 id="lazy-loading">Lazy Loading</h4>
<h4 id="code-splitting">Code Splitting</h4>
<h2 id="chapter-3-deployment">Chapter 3: Deployment</h2>
<h3 id="preparing-for-production">Preparing for Production</h3>
<h3 id="cicd-pipelines">CI/CD Pipelines</h3>
<h4 id="github-actions">GitHub Actions</h4>
<h4 id="jenkins">Jenkins</h4>
<h4 id="gitlab-ci">GitLab CI</h4>
<h3 id="monitoring--maintenance">Monitoring &amp; Maintenance</h3>
<h2 id="appendix">Appendix</h2>
<h3 id="glossary">Glossary</h3>
<h3 id="references">References</h3>
"#;

const TOC_OUTPUT: &str = r##"
<ul>
  <li>
    <a href="#main-title">Main Title</a>
    <ul>
      <li>
        <a href="#introduction">Introduction</a>
        <ul>
          <li><a href="#background">Background</a></li>
          <li><a href="#purpose">Purpose</a></li>
        </ul>
      </li>
      <li>
        <a href="#chapter-1-getting-started">Chapter 1 Getting Started</a>
        <ul>
          <li>
            <a href="#installation">Installation</a>
            <ul>
              <li><a href="#windows">Windows</a></li>
              <li><a href="#mac">Mac</a></li>
              <li><a href="#linux">Linux</a></li>
            </ul>
          </li>
          <li>
            <a href="#setup">Setup</a>
            <ul>
              <li><a href="#configuration">Configuration</a></li>
              <li>
                <a href="#environment-variables">Environment Variables</a>
              </li>
            </ul>
          </li>
        </ul>
      </li>
      <li>
        <a href="#chapter-2-advanced-topics">Chapter 2 Advanced Topics</a>
        <ul>
          <li>
            <a href="#deep-dive-into-components">Deep Dive into Components</a>
            <ul>
              <li>
                <a href="#component-a">Component A</a>
                <ul>
                  <li><a href="#sub-component-a1">Subcomponent A1</a></li>
                  <li><a href="#sub-component-a2">Subcomponent A2</a></li>
                </ul>
              </li>
              <li>
                <a href="#component-b">Component B</a>
                <ul>
                  <li><a href="#sub-component-b1">Subcomponent B1</a></li>
                  <li><a href="#sub-component-b2">Subcomponent B2</a></li>
                </ul>
              </li>
            </ul>
          </li>
          <li>
            <a href="#optimization-techniques">Optimization Techniques</a>
            <ul>
              <li><a href="#caching">Caching</a></li>
              <li><a href="#lazy-loading">Lazy Loading</a></li>
              <li><a href="#code-splitting">Code Splitting</a></li>
            </ul>
          </li>
        </ul>
      </li>
      <li>
        <a href="#chapter-3-deployment">Chapter 3 Deployment</a>
        <ul>
          <li>
            <a href="#preparing-for-production">Preparing for Production</a>
          </li>
          <li>
            <a href="#cicd-pipelines">CICD Pipelines</a>
            <ul>
              <li><a href="#github-actions">GitHub Actions</a></li>
              <li><a href="#jenkins">Jenkins</a></li>
              <li><a href="#gitlab-ci">GitLab CI</a></li>
            </ul>
          </li>
          <li><a href="#monitoring--maintenance">Monitoring Maintenance</a></li>
        </ul>
      </li>
      <li>
        <a href="#appendix">Appendix</a>
        <ul>
          <li><a href="#glossary">Glossary</a></li>
          <li><a href="#references">References</a></li>
        </ul>
      </li>
    </ul>
  </li>
</ul>
"##;

fn strip_ids(html: &str) -> String {
    let id_attr = Regex::new(r#" id="[^"]*""#).unwrap();
    id_attr.replace_all(html, "").into_owned()
}

#[test]
fn builds_deep_table_of_contents() {
    let toc = build_toc(HEADERS_WITH_ID, &TocOptions::default()).unwrap();
    assert_eq!(normalize_html(&toc), normalize_html(TOC_OUTPUT));
}

#[test]
fn generated_ids_match_fixture() {
    let raw = strip_ids(HEADERS_WITH_ID);
    assert!(!raw.contains("id="));

    let result = attach_identifiers(&raw, &IdOptions::default()).unwrap();
    assert_eq!(normalize_html(&result), normalize_html(HEADERS_WITH_ID));
}

#[test]
fn anchors_do_not_change_the_table_of_contents() {
    let with_anchors = attach_anchors(HEADERS_WITH_ID, &AnchorOptions::default()).unwrap();
    assert!(with_anchors.contains(r##"<a href="#monitoring--maintenance"> #</a>"##));

    let toc = build_toc(&with_anchors, &TocOptions::default()).unwrap();
    assert_eq!(normalize_html(&toc), normalize_html(TOC_OUTPUT));
}

#[test]
fn full_pipeline_from_raw_headings() {
    let raw = strip_ids(HEADERS_WITH_ID);
    let processed = process_html(&raw, &Config::default()).unwrap();

    assert_eq!(normalize_html(&processed.toc), normalize_html(TOC_OUTPUT));
    assert_eq!(
        normalize_html(&build_toc(&processed.html, &TocOptions::default()).unwrap()),
        normalize_html(TOC_OUTPUT)
    );
}
