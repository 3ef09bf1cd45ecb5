use diesel::prelude::*;
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;
use crate::{
    models::content_models::{Article, NewArticle, NewProject, Project},
    schema::{blog_posts, projects},
    DbPool,
};

const RELATED_ARTICLE_LIMIT: i64 = 3;
const FEATURED_PROJECT_LIMIT: i64 = 3;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database pool unavailable: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] DieselError),
}

/// Read side of the studio's published content: blog articles and project case studies.
pub struct ContentRepository {
    pool: DbPool,
}

impl ContentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Published articles, newest first, optionally narrowed to one category
    pub fn published_articles(&self, category: Option<&str>) -> Result<Vec<Article>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let mut query = blog_posts::table
            .filter(blog_posts::published.eq(true))
            .order(blog_posts::published_at.desc())
            .select(Article::as_select())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(blog_posts::category.eq(category.to_string()));
        }
        Ok(query.load(&mut conn)?)
    }

    // Unpublished drafts are treated exactly like missing slugs
    pub fn find_published_article(&self, slug: &str) -> Result<Option<Article>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let article = blog_posts::table
            .filter(blog_posts::slug.eq(slug))
            .filter(blog_posts::published.eq(true))
            .select(Article::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(article)
    }

    pub fn related_articles(&self, article: &Article) -> Result<Vec<Article>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let related = blog_posts::table
            .filter(blog_posts::category.eq(&article.category))
            .filter(blog_posts::published.eq(true))
            .filter(blog_posts::id.ne(article.id))
            .order(blog_posts::published_at.desc())
            .limit(RELATED_ARTICLE_LIMIT)
            .select(Article::as_select())
            .load(&mut conn)?;
        Ok(related)
    }

    pub fn projects(&self, category: Option<&str>) -> Result<Vec<Project>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let mut query = projects::table
            .order((projects::year.desc(), projects::id.asc()))
            .select(Project::as_select())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(projects::category.eq(category.to_string()));
        }
        Ok(query.load(&mut conn)?)
    }

    pub fn featured_projects(&self) -> Result<Vec<Project>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let featured = projects::table
            .filter(projects::featured.eq(true))
            .order((projects::year.desc(), projects::id.asc()))
            .limit(FEATURED_PROJECT_LIMIT)
            .select(Project::as_select())
            .load(&mut conn)?;
        Ok(featured)
    }

    pub fn find_project(&self, slug: &str) -> Result<Option<Project>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let project = projects::table
            .filter(projects::slug.eq(slug))
            .select(Project::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(project)
    }

    pub fn count_articles(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(blog_posts::table.count().get_result(&mut conn)?)
    }

    pub fn count_projects(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(projects::table.count().get_result(&mut conn)?)
    }

    pub fn insert_articles(&self, articles: &[NewArticle]) -> Result<usize, RepositoryError> {
        let mut conn = self.pool.get()?;
        let inserted = conn.transaction::<_, DieselError, _>(|conn| {
            let mut inserted = 0;
            for article in articles {
                inserted += diesel::insert_into(blog_posts::table)
                    .values(article)
                    .execute(conn)?;
            }
            Ok(inserted)
        })?;
        Ok(inserted)
    }

    pub fn insert_projects(&self, new_projects: &[NewProject]) -> Result<usize, RepositoryError> {
        let mut conn = self.pool.get()?;
        let inserted = conn.transaction::<_, DieselError, _>(|conn| {
            let mut inserted = 0;
            for project in new_projects {
                inserted += diesel::insert_into(projects::table)
                    .values(project)
                    .execute(conn)?;
            }
            Ok(inserted)
        })?;
        Ok(inserted)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{article, project};
    use super::*;
    use crate::db::test_pool;

    fn seeded() -> ContentRepository {
        let repo = ContentRepository::new(test_pool());
        repo.insert_articles(&[
            article("solar-skins", "energy", 300, true),
            article("rain-rooms", "water", 200, true),
            article("draft-idea", "energy", 400, false),
            article("heat-pumps", "energy", 100, true),
        ])
        .unwrap();
        repo.insert_projects(&[
            project("urban-hub", "urban", 2023, true),
            project("compact-catalyst", "residential", 2024, true),
            project("universal-blueprint", "research", 2024, true),
            project("old-pavilion", "commercial", 2019, true),
            project("garden-house", "residential", 2021, false),
        ])
        .unwrap();
        repo
    }

    #[test]
    fn published_articles_are_newest_first_and_skip_drafts() {
        let repo = seeded();
        let slugs: Vec<String> = repo
            .published_articles(None)
            .unwrap()
            .into_iter()
            .map(|a| a.slug)
            .collect();
        assert_eq!(slugs, vec!["solar-skins", "rain-rooms", "heat-pumps"]);
    }

    #[test]
    fn category_filter_narrows_articles() {
        let repo = seeded();
        let energy = repo.published_articles(Some("energy")).unwrap();
        assert_eq!(energy.len(), 2);
        assert!(energy.iter().all(|a| a.category == "energy"));
    }

    #[test]
    fn drafts_are_not_found_by_slug() {
        let repo = seeded();
        assert!(repo.find_published_article("draft-idea").unwrap().is_none());
        assert!(repo.find_published_article("missing").unwrap().is_none());
        assert!(repo.find_published_article("rain-rooms").unwrap().is_some());
    }

    #[test]
    fn related_articles_share_category_and_exclude_self() {
        let repo = seeded();
        let solar = repo.find_published_article("solar-skins").unwrap().unwrap();
        let related = repo.related_articles(&solar).unwrap();
        let slugs: Vec<&str> = related.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["heat-pumps"]);
    }

    #[test]
    fn projects_order_by_year_descending() {
        let repo = seeded();
        let years: Vec<i32> = repo.projects(None).unwrap().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2024, 2024, 2023, 2021, 2019]);
        let residential = repo.projects(Some("residential")).unwrap();
        assert_eq!(residential.len(), 2);
    }

    #[test]
    fn featured_projects_are_capped_at_three() {
        let repo = seeded();
        let featured = repo.featured_projects().unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
        assert!(featured.iter().all(|p| p.slug != "old-pavilion"));
    }

    #[test]
    fn counts_reflect_inserted_rows() {
        let repo = seeded();
        assert_eq!(repo.count_articles().unwrap(), 4);
        assert_eq!(repo.count_projects().unwrap(), 5);
    }
}
