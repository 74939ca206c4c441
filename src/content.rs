//! Static site content: service catalog, portfolio, and description parsing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is read-only and defined at startup. The router resolves
//! hash fragments against [`SERVICES`]; pages render straight from these
//! slices. Image references are opaque paths resolved by the browser.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A named offering shown as a card on the home page.
#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    /// Unique key, also used as the URL hash fragment.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    /// Long-form text; lines starting with `•` are bullet items.
    pub detailed_description: &'static str,
    pub cta_label: &'static str,
}

/// A showcased past project linking to the live site.
#[derive(Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub link: &'static str,
}

pub const BRAND: &str = "Crafted Web";

/// Hero backdrop, relative to the site root.
pub const HERO_IMAGE: &str = "images/hero.svg";
pub const ABOUT_IMAGE: &str = "images/about.svg";

pub static SERVICES: [Service; 3] = [
    Service {
        id: "custom-designs",
        title: "Custom Designs",
        description: "Tailored websites that reflect your brand's identity and message.",
        image_url: "images/custom-designs.svg",
        detailed_description: "
            At Crafted Web, we specialize in creating visually captivating and user-friendly websites tailored to your business needs. Our team of experienced designers will collaborate with you to understand your brand and target audience, ensuring each design resonates and engages visitors.

            We focus on creating responsive websites that look great on any device, optimizing user experience to drive conversions. Whether you're starting from scratch or revamping an existing site, our design process guarantees a polished, professional look that enhances your brand identity and leaves a lasting impression on your customers.

            Our custom design services include:
            • Brand-aligned visual aesthetics
            • User-centered interface design
            • Custom graphics and illustrations
            • Typography selection and hierarchy
            • Color scheme development
            • Interactive elements and animations
        ",
        cta_label: "Schedule Design Consultation",
    },
    Service {
        id: "responsive-layouts",
        title: "Responsive Layouts",
        description: "Optimized for desktops, tablets, and smartphones for a seamless user experience.",
        image_url: "images/responsive-layouts.svg",
        detailed_description: "
            In today's multi-device world, responsive design isn't just a feature - it's essential. At Crafted Web, we build websites that adapt beautifully to any screen size, from large desktop monitors to tablets and smartphones.

            Our responsive layouts ensure your content remains accessible, readable, and visually appealing regardless of how your customers access your site. This approach not only improves user experience but also boosts your search engine rankings, as Google prioritizes mobile-friendly websites.

            Our responsive layout services include:
            • Fluid grid layouts that adjust to any screen size
            • Flexible images and media that scale appropriately
            • Media queries to target specific devices and viewport sizes
            • Performance optimization for mobile connections
            • Touch-friendly navigation and interactive elements
            • Extensive cross-device testing and quality assurance
        ",
        cta_label: "See Our Responsive Work",
    },
    Service {
        id: "seo-performance",
        title: "SEO & Performance",
        description: "Boost your visibility and website speed with our expert optimization strategies.",
        image_url: "images/seo-performance.svg",
        detailed_description: "
            A beautiful website is only effective if people can find it and it loads quickly. Our SEO and performance optimization services ensure your website ranks well in search engines and provides a lightning-fast experience for your visitors.

            We implement technical SEO best practices during development and optimize your content structure to improve visibility. Additionally, we fine-tune your website's performance to minimize load times, reduce bounce rates, and improve conversion rates.

            Our SEO & Performance services include:
            • Keyword research and implementation
            • On-page SEO optimization
            • Technical SEO audits and improvements
            • Image and asset optimization
            • Caching strategies and CDN implementation
            • Core Web Vitals optimization
            • Page speed optimization
            • Regular performance reporting and updates
        ",
        cta_label: "Boost Your Site Performance",
    },
];

pub static PORTFOLIO: [PortfolioItem; 1] = [PortfolioItem {
    title: "ShiftSync",
    description: "A website that allows effortless shift management for businesses.",
    image_url: "images/shiftsync.svg",
    link: "https://shift-sync.netlify.app",
}];

/// Look up a service by its identifier.
#[must_use]
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

/// One rendered chunk of a service's long description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionBlock {
    Paragraph(String),
    Bullets(Vec<String>),
}

/// Split a long description into paragraphs and bullet lists.
///
/// Blank lines are dropped. Consecutive `•` lines collapse into a single
/// list; a line carrying several `•` markers contributes one item per marker.
#[must_use]
pub fn description_blocks(text: &str) -> Vec<DescriptionBlock> {
    let mut blocks: Vec<DescriptionBlock> = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !line.starts_with('•') {
            blocks.push(DescriptionBlock::Paragraph(line.to_owned()));
            continue;
        }
        let items: Vec<String> = line
            .split('•')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
        if items.is_empty() {
            continue;
        }
        match blocks.last_mut() {
            Some(DescriptionBlock::Bullets(list)) => list.extend(items),
            _ => blocks.push(DescriptionBlock::Bullets(items)),
        }
    }
    blocks
}
