use diesel::prelude::*;
use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use crate::{
    models::lead_models::{NewContactInquiry, NewNewsletterSubscriber},
    schema::{contact_inquiries, newsletter_subscribers},
    DbPool,
};

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("email is already subscribed")]
    AlreadySubscribed,
    #[error("database pool unavailable: {0}")]
    Pool(#[from] PoolError),
    #[error("insert failed: {0}")]
    Query(DieselError),
}

impl From<DieselError> for LeadError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => LeadError::AlreadySubscribed,
            other => LeadError::Query(other),
        }
    }
}

/// Insert-only sink for contact inquiries and newsletter signups.
#[cfg_attr(test, mockall::automock)]
pub trait LeadStore: Send + Sync {
    fn insert_inquiry(&self, inquiry: NewContactInquiry) -> Result<(), LeadError>;

    /// `email` must already be normalized. A second insert of the same address
    /// fails with `LeadError::AlreadySubscribed` and leaves the table unchanged.
    fn insert_subscriber(&self, email: &str, created_at: i64) -> Result<(), LeadError>;
}

pub struct LeadRepository {
    pool: DbPool,
}

impl LeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[cfg(test)]
impl LeadRepository {
    pub fn subscriber_count(&self, search_email: &str) -> Result<i64, LeadError> {
        let mut conn = self.pool.get()?;
        let count = newsletter_subscribers::table
            .filter(newsletter_subscribers::email.eq(search_email))
            .count()
            .get_result(&mut conn)?;
        Ok(count)
    }

    pub fn inquiry_count(&self) -> Result<i64, LeadError> {
        let mut conn = self.pool.get()?;
        Ok(contact_inquiries::table.count().get_result(&mut conn)?)
    }
}

impl LeadStore for LeadRepository {
    fn insert_inquiry(&self, inquiry: NewContactInquiry) -> Result<(), LeadError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(contact_inquiries::table)
            .values(&inquiry)
            .execute(&mut conn)?;
        Ok(())
    }

    fn insert_subscriber(&self, email: &str, created_at: i64) -> Result<(), LeadError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(newsletter_subscribers::table)
            .values(&NewNewsletterSubscriber { email, created_at })
            .execute(&mut conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::lead_models::{ContactInquiry, NewsletterSubscriber};

    fn inquiry(message: &str) -> NewContactInquiry {
        NewContactInquiry {
            name: "Ada Builder".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            company: Some("Builder & Co".to_string()),
            project_type: Some("residential".to_string()),
            message: message.to_string(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn stores_contact_inquiries() {
        let repo = LeadRepository::new(test_pool());
        repo.insert_inquiry(inquiry("We want a net-positive home.")).unwrap();
        repo.insert_inquiry(inquiry("And a studio out back.")).unwrap();
        assert_eq!(repo.inquiry_count().unwrap(), 2);

        let mut conn = repo.pool.get().unwrap();
        let stored: Vec<ContactInquiry> = contact_inquiries::table
            .select(ContactInquiry::as_select())
            .order(contact_inquiries::id.asc())
            .load(&mut conn)
            .unwrap();
        assert_eq!(stored[0].message, "We want a net-positive home.");
        assert_eq!(stored[1].company.as_deref(), Some("Builder & Co"));
        assert!(stored[1].phone.is_none());
    }

    #[test]
    fn duplicate_subscriber_maps_to_already_subscribed() {
        let repo = LeadRepository::new(test_pool());
        repo.insert_subscriber("reader@example.com", 1).unwrap();

        let err = repo.insert_subscriber("reader@example.com", 2).unwrap_err();
        assert!(matches!(err, LeadError::AlreadySubscribed));
        assert_eq!(repo.subscriber_count("reader@example.com").unwrap(), 1);
    }

    #[test]
    fn signup_times_past_2038_are_kept_intact() {
        let repo = LeadRepository::new(test_pool());
        let year_2100 = 4_102_444_800_i64;
        repo.insert_subscriber("future@example.com", year_2100).unwrap();

        let mut conn = repo.pool.get().unwrap();
        let stored = newsletter_subscribers::table
            .select(NewsletterSubscriber::as_select())
            .first(&mut conn)
            .unwrap();
        assert_eq!(stored.created_at, year_2100);
    }

    #[test]
    fn other_database_errors_stay_generic() {
        let err = LeadError::from(DieselError::NotFound);
        assert!(matches!(err, LeadError::Query(DieselError::NotFound)));
    }
}
