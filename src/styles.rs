//! Stylesheet emitted ahead of the card grid.
//!
//! The container stacks cards in a column on narrow screens and switches to a
//! wrapping row at 768px. Class names here are the ones produced by
//! [`crate::render`].

/// Width at which the container switches from column to row layout.
pub const GRID_BREAKPOINT_PX: u32 = 768;

const FONT_IMPORT: &str = r#"@import url("https://fonts.googleapis.com/css2?family=Poppins:ital,wght@0,100;0,200;0,300;0,400;0,500;0,600;0,700;0,800;0,900;1,100;1,200;1,300;1,400;1,500;1,600;1,700;1,800;1,900&display=swap");"#;

const CARD_CSS: &str = r#"
.news-widget-container {
  display: flex;
  flex-direction: column;
  flex-wrap: wrap;
}

.wrapper {
  position: relative;
  min-height: 1px;
  padding: 8px;
}

.link {
  width: 100%;
}

a {
  color: black;
}

.public-card {
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
  min-width: 25%;
  padding-right: 8px;
  padding-left: 8px;
}

.public-card__header {
  position: relative;
  width: 100%;
  height: 150px;
  background-size: cover;
  background-position: center;
}

.public-card__tag-infos {
  position: absolute;
  display: flex;
  flex-direction: column;
  left: 0;
  top: 1rem;
}

.public-card-tag,
.public-card__publish-at,
.public-card__categories {
  display: inline-block;
  margin-bottom: 2px;
  padding: 2px 5px;
  font-size: 0.75rem;
  color: #fff;
  background: #040D1C;
}

.public-card__body {
  padding: 0.5rem;
  position: relative;
}

.public-card__title {
  position: relative;
  display: inline-block;
  margin: 0.5rem auto 1rem;
  font-weight: bold;
  z-index: 1;
  color: black;
  font-size: 14px;
  letter-spacing: 0;
  line-height: 24px;
  font-family: 'Poppins', sans-serif !important;
}

.public-card__title::before {
  content: "";
  position: absolute;
  bottom: 2px;
  left: 0;
  width: 100%;
  height: 8px;
  background: #A0C3FF;
  z-index: -1;
}

.public-card__content {
  position: relative;
  overflow: hidden;
  height: 100px;
  -webkit-text-size-adjust: 100%;
  -webkit-font-smoothing: antialiased;
  font-weight: 400;
  line-height: 24px;
  color: black;
  font-family: 'Poppins', sans-serif !important;
}

.public-card__content::after {
  content: "";
  position: absolute;
  left: 0;
  right: 0;
  height: 80px;
  bottom: 0;
  background: linear-gradient(to bottom, rgba(255, 255, 255, 0), #fff 100%);
}
"#;

/// The complete `<style>` element.
pub fn style_block() -> String {
    format!(
        "<style>\n{FONT_IMPORT}\n{CARD_CSS}\n@media (min-width: {GRID_BREAKPOINT_PX}px) {{\n  .news-widget-container {{\n    flex-direction: row;\n  }}\n\n  .wrapper {{\n    width: 25%;\n    padding: 0;\n  }}\n}}\n</style>\n"
    )
}
