use crate::config::SiteConfig;

const DEFAULT_IMAGE: &str = "/static/og-image.png";
const DEFAULT_ROBOTS: &str = "index, follow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

/// Head metadata of one page: title, description, OpenGraph and Twitter card.
#[derive(Debug, Clone)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub image: String,
    pub kind: PageKind,
    pub site_name: String,
    pub keywords: Option<String>,
    pub robots: String,
}

impl SeoMeta {
    /// Metadata for the page at `path`, titled `"{title} | {site name}"`.
    pub fn new(site: &SiteConfig, title: &str, description: &str, path: &str) -> Self {
        Self {
            title: format!("{title} | {}", site.name),
            description: description.to_owned(),
            url: Some(site.url(path)),
            image: site.url(DEFAULT_IMAGE),
            kind: PageKind::Website,
            site_name: site.name.to_owned(),
            keywords: None,
            robots: DEFAULT_ROBOTS.to_owned(),
        }
    }

    /// Relative images are served from the public url.
    pub fn image(mut self, site: &SiteConfig, image: &str) -> Self {
        self.image = if image.starts_with("http") {
            image.to_owned()
        } else {
            site.url(image)
        };
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_owned());
        self
    }

    pub fn robots(mut self, robots: &str) -> Self {
        self.robots = robots.to_owned();
        self
    }

    pub fn kind(mut self, kind: PageKind) -> Self {
        self.kind = kind;
        self
    }
}
