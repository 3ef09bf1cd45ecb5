use diesel::prelude::*;
use crate::schema::contact_inquiries;
use crate::schema::newsletter_subscribers;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactInquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
    pub created_at: i64, // int timestamp utc epoch
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = contact_inquiries)]
pub struct NewContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewsletterSubscriber {
    pub id: i32,
    pub email: String, // unique, stored trimmed and lowercased
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = newsletter_subscribers)]
pub struct NewNewsletterSubscriber<'a> {
    pub email: &'a str,
    pub created_at: i64,
}
