use crate::modules::brand::domain::Brand;
use crate::modules::brand::infrastructure::models::BrandRow;

pub struct BrandMapper;

impl BrandMapper {
    pub fn to_domain(row: BrandRow) -> Brand {
        Brand {
            id: row.id,
            name: row.name.trim().to_string(),
            owner_id: row.owner_id,
            billing_email: row.billing_email.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
