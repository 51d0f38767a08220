//! schema.org JSON-LD builders.
//!
//! Page URLs come from the [`AlternatesResolver`]. Node ids (`/#website`)
//! and asset URLs are origin-relative and not locale-qualified.

use crate::catalog::{BlogCategory, BlogPost, Course};
use crate::i18n::{AlternatesResolver, PathError};
use serde_json::{json, Value};

const CONTEXT: &str = "https://schema.org";
const SITE_NAME: &str = "SeftonLinks.com";

/// WebSite and Organization graph for the site root.
pub fn website(resolver: &AlternatesResolver) -> Result<Value, PathError> {
    let origin = resolver.origin();

    Ok(json!({
        "@context": CONTEXT,
        "@graph": [
            {
                "@type": "WebSite",
                "@id": format!("{origin}/#website"),
                "url": resolver.page_url("/")?,
                "name": SITE_NAME,
                "description": "The definitive links golf guide to Royal Birkdale and the Sefton Coast.",
                "publisher": { "@id": format!("{origin}/#organization") },
                "inLanguage": "en-GB",
                "potentialAction": {
                    "@type": "ReadAction",
                    "target": resolver.page_url("/courses")?,
                },
            },
            {
                "@type": "Organization",
                "@id": format!("{origin}/#organization"),
                "name": SITE_NAME,
                "url": resolver.page_url("/")?,
                "logo": {
                    "@type": "ImageObject",
                    "url": format!("{origin}/og-default.jpg"),
                    "width": 1200,
                    "height": 630,
                },
            },
        ],
    }))
}

fn course_url(resolver: &AlternatesResolver, course: &Course) -> Result<String, PathError> {
    resolver.page_url(&format!("/courses/{}", course.slug))
}

fn golf_course_node(resolver: &AlternatesResolver, course: &Course) -> Result<Value, PathError> {
    let url = course_url(resolver, course)?;

    Ok(json!({
        "@type": "GolfCourse",
        "@id": url,
        "name": course.name,
        "description": course.tagline,
        "url": url,
        "sameAs": [course.website],
        "address": {
            "@type": "PostalAddress",
            "streetAddress": course.address,
            "postalCode": course.postcode,
            "addressRegion": "Merseyside",
            "addressCountry": "GB",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": course.latitude,
            "longitude": course.longitude,
        },
        "amenityFeature": [
            { "@type": "LocationFeatureSpecification", "name": "Par", "value": course.par },
            { "@type": "LocationFeatureSpecification", "name": "Yardage", "value": course.yardage },
            { "@type": "LocationFeatureSpecification", "name": "Course Rating", "value": course.course_rating },
            { "@type": "LocationFeatureSpecification", "name": "Slope Rating", "value": course.slope_rating },
        ],
        "priceRange": course.green_fee_range(),
    }))
}

/// GolfCourse plus its Home > Courses > course breadcrumb trail.
pub fn golf_course(resolver: &AlternatesResolver, course: &Course) -> Result<Value, PathError> {
    let trail = breadcrumbs(&[
        ("Home", resolver.page_url("/")?),
        ("Courses", resolver.page_url("/courses")?),
        (course.name.as_str(), course_url(resolver, course)?),
    ]);

    Ok(json!({
        "@context": CONTEXT,
        "@graph": [golf_course_node(resolver, course)?, trail],
    }))
}

/// BreadcrumbList node; positions start at 1.
pub fn breadcrumbs(items: &[(&str, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();

    json!({
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

pub fn course_list(resolver: &AlternatesResolver, courses: &[Course]) -> Result<Value, PathError> {
    let elements = courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            Ok(json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": golf_course_node(resolver, course)?,
            }))
        })
        .collect::<Result<Vec<Value>, PathError>>()?;

    Ok(json!({
        "@context": CONTEXT,
        "@type": "ItemList",
        "name": "Sefton Coast golf courses",
        "numberOfItems": courses.len(),
        "itemListElement": elements,
    }))
}

/// Article node for a blog post. `articleSection` is the category label.
pub fn article(
    resolver: &AlternatesResolver,
    post: &BlogPost,
    category: Option<&BlogCategory>,
) -> Result<Value, PathError> {
    let origin = resolver.origin();
    let url = resolver.page_url(&format!("/blog/{}", post.slug))?;
    let date = post.date.format("%Y-%m-%d").to_string();

    let mut value = json!({
        "@context": CONTEXT,
        "@type": "Article",
        "headline": post.title,
        "description": post.excerpt,
        "url": url,
        "datePublished": date,
        "dateModified": date,
        "inLanguage": "en-GB",
        "publisher": { "@id": format!("{origin}/#organization"), "name": SITE_NAME },
        "mainEntityOfPage": { "@type": "WebPage", "@id": url },
    });

    if let Some(category) = category {
        value["articleSection"] = Value::String(category.label.clone());
    }
    if let Some(image) = &post.image {
        value["image"] = Value::String(format!("{}{}", origin, image));
    }

    Ok(value)
}

/// `<script type="application/ld+json">` block. `</` is escaped so text
/// content cannot close the script element early.
pub fn to_script_tag(value: &Value) -> String {
    let json = value.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, json)
}
