//! Inline stylesheet for the vintage textbook look.
//!
//! Embedded in every generated document so the downstream renderer needs no
//! external resources.

/// Ornament shown above and below the cover title (U+2767 rotated floral heart).
pub const ORNAMENT: &str = "\u{2767}";

/// Page and typography rules.
pub const STYLESHEET: &str = r#"
    @page {
      size: A4;
      margin: 2cm;
    }
    body {
      font-family: 'Georgia', 'Times New Roman', serif;
      line-height: 1.6;
      color: #2c2416;
      background-color: #f9f6f0;
      margin: 0;
      padding: 20px;
    }
    .cover {
      text-align: center;
      padding: 100px 20px;
      border: 3px double #6B4423;
      margin-bottom: 50px;
    }
    .cover h1 {
      font-size: 48px;
      color: #6B4423;
      margin: 20px 0;
      font-weight: bold;
    }
    .ornament {
      font-size: 36px;
      color: #8B6F47;
      margin: 20px 0;
    }
    .subtitle {
      font-size: 18px;
      color: #8B6F47;
      margin-top: 30px;
    }
    .toc {
      margin: 30px 0;
      padding: 20px;
      background-color: #fff;
      border: 2px solid #6B4423;
    }
    .toc h2 {
      text-align: center;
      color: #6B4423;
      font-size: 28px;
    }
    .toc-item {
      margin: 10px 0;
      padding: 8px;
      border-bottom: 1px dotted #ccc;
    }
    .chapter {
      page-break-before: always;
      margin-top: 50px;
    }
    .chapter-number {
      font-size: 72px;
      color: #6B4423;
      text-align: center;
      margin: 20px 0;
    }
    .chapter-title {
      font-size: 36px;
      color: #6B4423;
      text-align: center;
      border-top: 3px double #6B4423;
      border-bottom: 3px double #6B4423;
      padding: 20px;
      margin: 20px 0;
    }
    .section {
      font-size: 24px;
      color: #6B4423;
      margin: 30px 0 15px 0;
      padding: 10px;
      background-color: #F5E6CC;
      border-left: 4px solid #6B4423;
    }
    .paragraph {
      text-align: justify;
      text-indent: 30px;
      margin: 15px 0;
      font-size: 14px;
    }
    .bullet-list {
      margin: 15px 0;
      padding-left: 40px;
    }
    .bullet-item {
      margin: 8px 0;
      font-size: 14px;
    }
    .bullet-item::before {
      content: '\25C6  ';
      color: #6B4423;
      font-weight: bold;
      margin-right: 8px;
    }
    strong {
      color: #6B4423;
      font-weight: bold;
    }
"#;
