use std::collections::BTreeMap;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub featured_image: Option<String>,
    pub published_at: i32,
}

impl Article {
    pub fn published_label(&self) -> String {
        format_date(self.published_at)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ArticleDetail {
    pub article: Article,
    pub related: Vec<Article>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub year: i32,
    pub area_sqm: Option<i32>,
    pub status: String,
    pub client_name: Option<String>,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub sustainability_metrics: BTreeMap<String, f64>,
    pub featured: bool,
}

#[derive(Serialize, Clone, PartialEq, Debug, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct NewsletterRequest<'a> {
    pub email: &'a str,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct LeadResult {
    pub success: bool,
    pub error: Option<String>,
    pub code: Option<String>,
}

/// Headline figures shown on a project card, in display order.
#[derive(Clone, PartialEq, Debug)]
pub struct MetricSummary {
    pub label: &'static str,
    pub value: String,
}

impl Project {
    pub fn is_in_progress(&self) -> bool {
        self.status == "in-progress"
    }

    pub fn area_label(&self) -> Option<String> {
        self.area_sqm
            .filter(|a| *a > 0)
            .map(|a| format!("{} m²", group_thousands(a as u64)))
    }

    pub fn metric_summaries(&self) -> Vec<MetricSummary> {
        let metrics = &self.sustainability_metrics;
        let mut out = Vec::new();
        if let Some(kwh) = metrics.get("energy_generated_kwh") {
            out.push(MetricSummary {
                label: "Energy Generated",
                value: format!("{:.0}k kWh", kwh / 1000.0),
            });
        }
        if let Some(pct) = metrics.get("water_recycled_percent") {
            out.push(MetricSummary {
                label: "Water Recycled",
                value: format!("{:.0}%", pct),
            });
        }
        if let Some(tons) = metrics.get("carbon_offset_tons") {
            out.push(MetricSummary {
                label: "Carbon Offset",
                value: format!("{:.0} tons", tons),
            });
        }
        if let Some(area) = metrics.get("green_space_sqm") {
            out.push(MetricSummary {
                label: "Green Space",
                value: format!("{:.0} m²", area),
            });
        }
        out
    }
}

/// `20800` becomes `"20,800"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_date(timestamp: i32) -> String {
    match Utc.timestamp_opt(i64::from(timestamp), 0).single() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(metrics: &[(&str, f64)]) -> Project {
        Project {
            id: 1,
            title: "Urban Hub".into(),
            slug: "urban-hub".into(),
            description: String::new(),
            category: "urban".into(),
            location: "Singapore".into(),
            year: 2023,
            area_sqm: None,
            status: "completed".into(),
            client_name: None,
            hero_image: None,
            images: Vec::new(),
            video_url: None,
            sustainability_metrics: metrics.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            featured: true,
        }
    }

    #[test]
    fn metrics_render_in_fixed_order_with_units() {
        let p = project(&[
            ("water_recycled_percent", 85.0),
            ("energy_generated_kwh", 100_000.0),
            ("carbon_offset_tons", 40.0),
        ]);
        let summaries = p.metric_summaries();
        let values: Vec<&str> = summaries.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["100k kWh", "85%", "40 tons"]);
    }

    #[test]
    fn empty_metrics_have_no_summaries() {
        assert!(project(&[]).metric_summaries().is_empty());
    }

    #[test]
    fn area_and_status_labels() {
        let mut p = project(&[]);
        assert_eq!(p.area_label(), None);
        p.area_sqm = Some(12_500);
        assert_eq!(p.area_label().as_deref(), Some("12,500 m²"));
        assert!(!p.is_in_progress());
        p.status = "in-progress".into();
        assert!(p.is_in_progress());
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(20_800), "20,800");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn dates_are_human_readable() {
        assert_eq!(format_date(1_714_521_600), "May 1, 2024");
    }

    #[test]
    fn project_tolerates_missing_lists() {
        let json = r#"{"id":1,"title":"T","slug":"t","description":"d","category":"c","location":"l",
            "year":2024,"area_sqm":null,"status":"completed","client_name":null,"hero_image":null,
            "video_url":null,"featured":false}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert!(p.images.is_empty());
        assert!(p.sustainability_metrics.is_empty());
    }
}
