use diesel::prelude::*;
use crate::schema::blog_posts;
use crate::schema::projects;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub featured_image: Option<String>,
    pub published_at: i32, // int timestamp utc epoch
    pub published: bool, // drafts stay hidden from every public query
}

#[derive(Insertable)]
#[diesel(table_name = blog_posts)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub featured_image: Option<String>,
    pub published_at: i32,
    pub published: bool,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub year: i32,
    pub area_sqm: Option<i32>,
    pub status: String, // "completed" or "in-progress"
    pub client_name: Option<String>,
    pub hero_image: Option<String>,
    pub images: String, // json array of image urls
    pub video_url: Option<String>,
    pub sustainability_metrics: String, // json object, metric name -> number
    pub featured: bool,
}

#[derive(Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject {
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
    pub images: String,
    pub video_url: Option<String>,
    pub sustainability_metrics: String,
    pub featured: bool,
}
