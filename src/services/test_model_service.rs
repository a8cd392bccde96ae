use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::database::entities::test_models;
use crate::errors::{TestModelError, TestModelResult};

#[derive(Clone)]
pub struct TestModelService {
    db: DatabaseConnection,
}

impl TestModelService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> TestModelResult<Vec<test_models::Model>> {
        let models = test_models::Entity::find()
            .order_by_asc(test_models::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    pub async fn get(&self, id: i32) -> TestModelResult<Option<test_models::Model>> {
        Ok(test_models::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, title: String) -> TestModelResult<test_models::Model> {
        let model = test_models::ActiveModel {
            title: Set(title),
            ..Default::default()
        };

        let model = model.insert(&self.db).await?;
        info!("Created test model {}", model.id);
        Ok(model)
    }

    pub async fn update(&self, id: i32, title: String) -> TestModelResult<test_models::Model> {
        let model = self.get(id).await?.ok_or(TestModelError::NotFound(id))?;

        let mut model: test_models::ActiveModel = model.into();
        model.title = Set(title);

        let model = model.update(&self.db).await?;
        info!("Updated test model {}", model.id);
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> TestModelResult<()> {
        let model = self.get(id).await?.ok_or(TestModelError::NotFound(id))?;
        test_models::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await?;
        info!("Deleted test model {}", model.id);
        Ok(())
    }
}
