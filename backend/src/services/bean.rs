//! Bean catalog service

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{empty_string_as_none, validate_bean_fields, BeanSummary, CoffeeBean, RoastLevel};
use uuid::Uuid;

use super::recipe::newest_first;
use crate::error::{AppError, AppResult};
use crate::store::JournalStore;

/// Bean service for managing the coffee catalog
#[derive(Clone)]
pub struct BeanService {
    store: Arc<JournalStore>,
}

/// Input for creating or editing a bean
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanInput {
    pub name: String,
    pub roaster: String,
    pub origin: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub farm: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub altitude: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub variety: Option<String>,
    #[serde(default = "default_process")]
    pub process: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub roast_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub open_date: Option<NaiveDate>,
    #[serde(default)]
    pub roast_level: RoastLevel,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

/// A bean with its recipes newest first and its average score
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanDetail {
    #[serde(flatten)]
    pub bean: CoffeeBean,
    pub average_score: Option<Decimal>,
}

impl From<CoffeeBean> for BeanDetail {
    fn from(mut bean: CoffeeBean) -> Self {
        bean.recipes = newest_first(&bean.recipes);
        let average_score = bean.average_score();
        Self { bean, average_score }
    }
}

fn default_process() -> String {
    shared::PROCESS_TYPES[0].to_string()
}

impl BeanInput {
    fn validate(&self) -> AppResult<()> {
        validate_bean_fields(&self.name, &self.roaster, &self.origin)?;
        Ok(())
    }

    /// Copy the editable fields onto a bean, leaving id, archive flag and recipes alone
    fn apply_to(self, bean: &mut CoffeeBean) {
        bean.name = self.name.trim().to_string();
        bean.roaster = self.roaster.trim().to_string();
        bean.origin = self.origin.trim().to_string();
        bean.farm = self.farm;
        bean.altitude = self.altitude;
        bean.variety = self.variety;
        bean.process = self.process;
        bean.roast_date = self.roast_date;
        bean.open_date = self.open_date;
        bean.roast_level = self.roast_level;
        bean.notes = self.notes;
    }
}

/// Find a bean by id inside a draft collection
pub(crate) fn find_bean_mut(beans: &mut [CoffeeBean], bean_id: Uuid) -> AppResult<&mut CoffeeBean> {
    beans
        .iter_mut()
        .find(|b| b.id == bean_id)
        .ok_or_else(|| AppError::NotFound("Bean".to_string()))
}

impl BeanService {
    /// Create a new BeanService instance
    pub fn new(store: Arc<JournalStore>) -> Self {
        Self { store }
    }

    /// List beans in journal order (most recently added first)
    pub async fn list_beans(&self, include_archived: bool) -> Vec<BeanSummary> {
        self.store
            .read(|beans| {
                beans
                    .iter()
                    .filter(|b| include_archived || !b.is_archived)
                    .map(CoffeeBean::summary)
                    .collect()
            })
            .await
    }

    /// Number of beans in the journal
    pub async fn count(&self) -> usize {
        self.store.read(|beans| beans.len()).await
    }

    /// Get a bean with all of its recipes
    pub async fn get_bean(&self, bean_id: Uuid) -> AppResult<BeanDetail> {
        self.store
            .read(|beans| beans.iter().find(|b| b.id == bean_id).cloned())
            .await
            .map(BeanDetail::from)
            .ok_or_else(|| AppError::NotFound("Bean".to_string()))
    }

    /// Add a bean to the top of the catalog
    pub async fn create_bean(&self, input: BeanInput) -> AppResult<CoffeeBean> {
        input.validate()?;

        let mut bean = CoffeeBean {
            id: Uuid::new_v4(),
            name: String::new(),
            roaster: String::new(),
            origin: String::new(),
            farm: None,
            altitude: None,
            variety: None,
            process: String::new(),
            roast_date: None,
            open_date: None,
            roast_level: RoastLevel::default(),
            notes: None,
            is_archived: false,
            recipes: Vec::new(),
        };
        input.apply_to(&mut bean);

        let created = bean.clone();
        self.store
            .update(move |beans| {
                beans.insert(0, bean);
                Ok(())
            })
            .await?;

        tracing::info!("Created bean {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Edit a bean's details; its recipes are kept
    pub async fn update_bean(&self, bean_id: Uuid, input: BeanInput) -> AppResult<CoffeeBean> {
        input.validate()?;

        self.store
            .update(move |beans| {
                let bean = find_bean_mut(beans, bean_id)?;
                input.apply_to(bean);
                Ok(bean.clone())
            })
            .await
    }

    /// Archive or restore a bean
    pub async fn set_archived(&self, bean_id: Uuid, archived: bool) -> AppResult<CoffeeBean> {
        let bean = self
            .store
            .update(move |beans| {
                let bean = find_bean_mut(beans, bean_id)?;
                bean.is_archived = archived;
                Ok(bean.clone())
            })
            .await?;

        tracing::info!("Bean {} archived={}", bean_id, archived);
        Ok(bean)
    }
}
