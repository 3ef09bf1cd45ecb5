use archidius_backend::{
    config::settings::Config,
    db,
    models::content_models::{NewArticle, NewProject},
    repositories::content_repository::ContentRepository,
};
use dotenvy::dotenv;
use serde_json::json;

struct SeedProject {
    title: &'static str,
    slug: &'static str,
    description: &'static str,
    category: &'static str,
    location: &'static str,
    year: i32,
    area_sqm: Option<i32>,
    status: &'static str,
    client_name: Option<&'static str>,
    hero_image: &'static str,
    energy_generated_kwh: i64,
    water_recycled_percent: i64,
    carbon_offset_tons: i64,
    green_space_sqm: i64,
    featured: bool,
}

struct SeedArticle {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: &'static str,
    featured_image: &'static str,
    published_at: i32,
}

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Urban Hub",
        slug: "urban-hub",
        description: "A self-sufficient urban ecosystem integrating residential, commercial, and green spaces.",
        category: "urban",
        location: "Singapore",
        year: 2023,
        area_sqm: Some(42000),
        status: "completed",
        client_name: Some("Marina Living Collective"),
        hero_image: "/futuristic-sustainable-urban-development-with-gree.jpg",
        energy_generated_kwh: 100_000,
        water_recycled_percent: 85,
        carbon_offset_tons: 40,
        green_space_sqm: 12000,
        featured: true,
    },
    SeedProject {
        title: "Compact Catalyst",
        slug: "compact-catalyst",
        description: "Innovative compact living that maximizes space efficiency and sustainability.",
        category: "residential",
        location: "Tokyo, Japan",
        year: 2024,
        area_sqm: Some(3800),
        status: "completed",
        client_name: None,
        hero_image: "/compact-modern-sustainable-apartment-building.jpg",
        energy_generated_kwh: 95_000,
        water_recycled_percent: 90,
        carbon_offset_tons: 35,
        green_space_sqm: 900,
        featured: true,
    },
    SeedProject {
        title: "Universal Blueprint",
        slug: "universal-blueprint",
        description: "Revolutionary adaptable housing system for diverse climates and cultures.",
        category: "research",
        location: "Multiple Locations",
        year: 2024,
        area_sqm: None,
        status: "in-progress",
        client_name: None,
        hero_image: "/modular-sustainable-housing-system-blueprint.jpg",
        energy_generated_kwh: 100_000,
        water_recycled_percent: 80,
        carbon_offset_tons: 50,
        green_space_sqm: 0,
        featured: true,
    },
    SeedProject {
        title: "Harbor Exchange",
        slug: "harbor-exchange",
        description: "A timber-framed office campus that exports more power than it draws across the year.",
        category: "commercial",
        location: "Rotterdam, Netherlands",
        year: 2022,
        area_sqm: Some(18500),
        status: "completed",
        client_name: Some("Maas Works"),
        hero_image: "/timber-office-campus-waterfront.jpg",
        energy_generated_kwh: 140_000,
        water_recycled_percent: 70,
        carbon_offset_tons: 62,
        green_space_sqm: 4200,
        featured: false,
    },
];

const ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Designing Buildings That Give Back",
        slug: "designing-buildings-that-give-back",
        excerpt: "Why net-positive energy is the baseline for every project we take on.",
        content: "Every building we design starts from one question: what does it return to its surroundings?\n\nSolar skins, rainwater loops and passive ventilation are not add-ons. They shape the massing from the first sketch.",
        category: "sustainability",
        featured_image: "/net-positive-facade-detail.jpg",
        published_at: 1_714_521_600,
    },
    SeedArticle {
        title: "Water as Infrastructure",
        slug: "water-as-infrastructure",
        excerpt: "Capturing, cleaning and reusing rainfall on site.",
        content: "A roof is a catchment. A courtyard is a reservoir. Treating water as part of the structure lets a building cover most of its own demand.",
        category: "sustainability",
        featured_image: "/rainwater-courtyard.jpg",
        published_at: 1_711_929_600,
    },
    SeedArticle {
        title: "Adaptive Systems That Learn Their Occupants",
        slug: "adaptive-systems-that-learn-their-occupants",
        excerpt: "Sensors and simple models that trade a little comfort for a lot of energy.",
        content: "Occupancy and comfort preferences drive the building's controls. The result is a quieter, cheaper, more comfortable space.",
        category: "technology",
        featured_image: "/adaptive-controls-dashboard.jpg",
        published_at: 1_709_251_200,
    },
    SeedArticle {
        title: "Compact Catalyst Wins Residential Award",
        slug: "compact-catalyst-wins-residential-award",
        excerpt: "Our Tokyo housing project was recognised for space efficiency.",
        content: "The jury highlighted the flexible floor plates and the shared rooftop garden.",
        category: "news",
        featured_image: "/compact-modern-sustainable-apartment-building.jpg",
        published_at: 1_706_745_600,
    },
];

impl SeedProject {
    fn to_new(&self) -> NewProject {
        NewProject {
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            location: self.location.to_string(),
            year: self.year,
            area_sqm: self.area_sqm,
            status: self.status.to_string(),
            client_name: self.client_name.map(str::to_string),
            hero_image: Some(self.hero_image.to_string()),
            images: json!([self.hero_image, "/placeholder.svg", "/placeholder.svg"]).to_string(),
            video_url: None,
            sustainability_metrics: json!({
                "energy_generated_kwh": self.energy_generated_kwh,
                "water_recycled_percent": self.water_recycled_percent,
                "carbon_offset_tons": self.carbon_offset_tons,
                "green_space_sqm": self.green_space_sqm,
            })
            .to_string(),
            featured: self.featured,
        }
    }
}

impl SeedArticle {
    fn to_new(&self) -> NewArticle {
        NewArticle {
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            author: "ArchiDius Studio".to_string(),
            category: self.category.to_string(),
            featured_image: Some(self.featured_image.to_string()),
            published_at: self.published_at,
            published: true,
        }
    }
}

/// Fills empty content tables; anything already present is left alone.
fn seed(repo: &ContentRepository) -> anyhow::Result<(usize, usize)> {
    let projects = if repo.count_projects()? == 0 {
        let rows: Vec<NewProject> = PROJECTS.iter().map(SeedProject::to_new).collect();
        repo.insert_projects(&rows)?
    } else {
        tracing::info!("Projects already present, skipping");
        0
    };

    let articles = if repo.count_articles()? == 0 {
        let rows: Vec<NewArticle> = ARTICLES.iter().map(SeedArticle::to_new).collect();
        repo.insert_articles(&rows)?
    } else {
        tracing::info!("Articles already present, skipping");
        0
    };

    Ok((projects, articles))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;
    let pool = db::build_pool(&config.database_url)?;
    db::run_migrations(&pool)?;

    let (projects, articles) = seed(&ContentRepository::new(pool))?;
    tracing::info!(projects, articles, "Seeding finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_once_and_is_readable_through_the_repository() {
        let path = std::env::temp_dir().join(format!("archidius-seed-{}.db", std::process::id()));
        let pool = db::build_pool(path.to_str().unwrap()).unwrap();
        db::run_migrations(&pool).unwrap();
        let repo = ContentRepository::new(pool);

        let (projects, articles) = seed(&repo).unwrap();
        assert_eq!(projects, PROJECTS.len());
        assert_eq!(articles, ARTICLES.len());

        let featured = repo.featured_projects().unwrap();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));
        assert!(repo.find_published_article(ARTICLES[0].slug).unwrap().is_some());

        assert_eq!(seed(&repo).unwrap(), (0, 0));
        assert_eq!(repo.count_projects().unwrap(), PROJECTS.len() as i64);

        drop(repo);
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }
}
