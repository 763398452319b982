use crate::dto::lead_dto::{ConvertLeadResponse, LeadPayload};
use crate::error::{Error, Result};
use crate::models::company::{Company, COMPANY_COLUMNS, DEFAULT_COMPANY_STATUS};
use crate::models::lead::{Lead, CONVERTED, DEFAULT_LEAD_STATUS, LEAD_COLUMNS, LEAD_STATUSES};
use crate::utils::validation::ensure_optional_one_of;
use sqlx::PgPool;

#[derive(Clone)]
pub struct LeadService {
    pool: PgPool,
}

impl LeadService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: LeadPayload) -> Result<Lead> {
        ensure_optional_one_of("lead_status", payload.lead_status.as_deref(), LEAD_STATUSES)?;
        let status = payload
            .lead_status
            .clone()
            .unwrap_or_else(|| DEFAULT_LEAD_STATUS.to_string());

        let sql = format!(
            r#"
            INSERT INTO leads (
                company_name, hr_person, designation, contact_no, email, address,
                source, reference, industry, company_size, city, lead_owner, lead_status
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13)
            RETURNING {}
            "#,
            LEAD_COLUMNS
        );
        let lead = bind_lead_fields(sqlx::query_as::<_, Lead>(&sql), &payload)
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(lead)
    }

    pub async fn list(&self) -> Result<Vec<Lead>> {
        let sql = format!(
            "SELECT {} FROM leads ORDER BY created_date DESC, id DESC",
            LEAD_COLUMNS
        );
        let leads = sqlx::query_as::<_, Lead>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(leads)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Lead> {
        let sql = format!("SELECT {} FROM leads WHERE id = $1", LEAD_COLUMNS);
        sqlx::query_as::<_, Lead>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Lead not found".into()))
    }

    /// Full replacement of the editable fields; a missing status keeps the current one.
    pub async fn update(&self, id: i64, payload: LeadPayload) -> Result<Lead> {
        ensure_optional_one_of("lead_status", payload.lead_status.as_deref(), LEAD_STATUSES)?;
        let sql = format!(
            r#"
            UPDATE leads SET
                company_name = $1, hr_person = $2, designation = $3, contact_no = $4,
                email = $5, address = $6, source = $7, reference = $8, industry = $9,
                company_size = $10, city = $11, lead_owner = $12,
                lead_status = COALESCE($13, lead_status)
            WHERE id = $14
            RETURNING {}
            "#,
            LEAD_COLUMNS
        );
        bind_lead_fields(sqlx::query_as::<_, Lead>(&sql), &payload)
            .bind(payload.lead_status.clone())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Lead not found".into()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Lead not found".into()));
        }
        Ok(())
    }

    /// Copies the lead into a new Active company and marks the lead Converted,
    /// both in one transaction.
    pub async fn convert_to_company(&self, id: i64) -> Result<ConvertLeadResponse> {
        let mut tx = self.pool.begin().await?;

        let select = format!("SELECT {} FROM leads WHERE id = $1 FOR UPDATE", LEAD_COLUMNS);
        let lead = sqlx::query_as::<_, Lead>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Lead not found".into()))?;

        if lead.lead_status == CONVERTED {
            return Err(Error::Conflict("Lead is already converted".into()));
        }

        let insert = format!(
            r#"
            INSERT INTO companies (name, hr_name, phone, email, industry, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        );
        let company = sqlx::query_as::<_, Company>(&insert)
            .bind(&lead.company_name)
            .bind(&lead.hr_person)
            .bind(&lead.contact_no)
            .bind(&lead.email)
            .bind(&lead.industry)
            .bind(DEFAULT_COMPANY_STATUS)
            .fetch_one(&mut *tx)
            .await?;

        let update = format!(
            "UPDATE leads SET lead_status = $1 WHERE id = $2 RETURNING {}",
            LEAD_COLUMNS
        );
        let lead = sqlx::query_as::<_, Lead>(&update)
            .bind(CONVERTED)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(lead_id = id, company_id = company.id, "Lead converted to company");

        Ok(ConvertLeadResponse { lead, company })
    }
}

type LeadQuery<'q> = sqlx::query::QueryAs<'q, sqlx::Postgres, Lead, sqlx::postgres::PgArguments>;

fn bind_lead_fields<'q>(query: LeadQuery<'q>, p: &LeadPayload) -> LeadQuery<'q> {
    query
        .bind(p.company_name.clone())
        .bind(p.hr_person.clone())
        .bind(p.designation.clone())
        .bind(p.contact_no.clone())
        .bind(p.email.clone())
        .bind(p.address.clone())
        .bind(p.source.clone())
        .bind(p.reference.clone())
        .bind(p.industry.clone())
        .bind(p.company_size.clone())
        .bind(p.city.clone())
        .bind(p.lead_owner.clone())
}
