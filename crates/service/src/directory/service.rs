use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use crate::{
    deadline::{with_timeout, DEFAULT_OPERATION_TIMEOUT},
    directory::repository::{AreaRepository, ReviewRepository, ShopRepository, WifiServiceRepository},
    errors::ServiceError,
    requests::{RegisterAreaRequest, RegisterReviewRequest, RegisterServiceRequest, RegisterShopRequest, Validate},
    responses::{
        AreaKeyResponse, AreaListingResponse, ClientShopListingResponse, DeletedResponse, ReviewIdResponse,
        ReviewListingResponse, ServiceIdResponse, ServiceListingResponse, ShopIdResponse, ShopListingResponse,
    },
};

/// Area registry: list, create and lenient delete-by-key.
pub struct AreaService<R: AreaRepository> {
    repo: Arc<R>,
    timeout: Duration,
}

impl<R: AreaRepository> AreaService<R> {
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self { Self { repo, timeout } }

    pub async fn list(&self) -> Result<AreaListingResponse, ServiceError> {
        let rows = with_timeout(self.timeout, "list_areas", self.repo.list()).await?;
        Ok(rows.into())
    }

    #[instrument(skip(self, req))]
    pub async fn create(&self, req: RegisterAreaRequest) -> Result<AreaKeyResponse, ServiceError> {
        let new = req.validate()?;
        let area = with_timeout(self.timeout, "create_area", self.repo.create(new)).await?;
        info!(area_id = area.id, area_key = %area.area_key, "area_created");
        Ok(AreaKeyResponse { area_key: area.area_key })
    }

    /// Missing keys are not an error: the response reports zero rows.
    #[instrument(skip(self))]
    pub async fn delete(&self, area_key: &str) -> Result<DeletedResponse, ServiceError> {
        let deleted = with_timeout(self.timeout, "delete_area", self.repo.delete_by_key(area_key)).await?;
        info!(area_key, deleted, "area_deleted");
        Ok(DeletedResponse { deleted })
    }
}

/// Wi-Fi service catalogue.
pub struct WifiService<R: WifiServiceRepository> {
    repo: Arc<R>,
    timeout: Duration,
}

impl<R: WifiServiceRepository> WifiService<R> {
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self { Self { repo, timeout } }

    pub async fn list(&self) -> Result<ServiceListingResponse, ServiceError> {
        let rows = with_timeout(self.timeout, "list_services", self.repo.list_with_shop_counts()).await?;
        Ok(rows.into())
    }

    #[instrument(skip(self, req))]
    pub async fn create(&self, req: RegisterServiceRequest) -> Result<ServiceIdResponse, ServiceError> {
        let new = req.validate()?;
        let service = with_timeout(self.timeout, "create_service", self.repo.create(new)).await?;
        info!(service_id = service.id, wifi_name = %service.wifi_name, "service_created");
        Ok(ServiceIdResponse { service_id: service.id })
    }
}

pub struct ShopService<R: ShopRepository> {
    repo: Arc<R>,
    timeout: Duration,
}

impl<R: ShopRepository> ShopService<R> {
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self { Self { repo, timeout } }

    /// Admin listing, keeps the service reference.
    pub async fn list(&self) -> Result<ShopListingResponse, ServiceError> {
        let rows = with_timeout(self.timeout, "list_shops", self.repo.list()).await?;
        Ok(rows.into())
    }

    /// Client listing, each shop carries its service's name and link.
    pub async fn list_for_clients(&self) -> Result<ClientShopListingResponse, ServiceError> {
        let rows = with_timeout(self.timeout, "list_client_shops", self.repo.list_with_services()).await?;
        Ok(rows.into())
    }

    #[instrument(skip(self, req))]
    pub async fn create(&self, req: RegisterShopRequest) -> Result<ShopIdResponse, ServiceError> {
        let new = req.validate()?;
        let shop = with_timeout(self.timeout, "create_shop", self.repo.create(new)).await?;
        info!(shop_id = shop.id, service_id = shop.service_id, "shop_created");
        Ok(ShopIdResponse { shop_id: shop.id })
    }
}

pub struct ReviewService<R: ReviewRepository> {
    repo: Arc<R>,
    timeout: Duration,
}

impl<R: ReviewRepository> ReviewService<R> {
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self { Self { repo, timeout } }

    pub async fn list(&self, shop_id: i32) -> Result<ReviewListingResponse, ServiceError> {
        let rows = with_timeout(self.timeout, "list_reviews", self.repo.list_by_shop(shop_id)).await?;
        Ok(rows.into())
    }

    /// `shop_id` comes from the caller (the route), overriding anything in `req`.
    #[instrument(skip(self, req))]
    pub async fn create(&self, shop_id: i32, mut req: RegisterReviewRequest) -> Result<ReviewIdResponse, ServiceError> {
        req.shop_id = Some(shop_id);
        let new = req.validate()?;
        let review = with_timeout(self.timeout, "create_review", self.repo.create(new)).await?;
        info!(review_id = review.id, shop_id, rating = review.rating, "review_created");
        Ok(ReviewIdResponse { review_id: review.id })
    }
}

/// All directory services over one shared repository.
pub struct Directory<R>
where
    R: AreaRepository + WifiServiceRepository + ShopRepository + ReviewRepository,
{
    pub areas: AreaService<R>,
    pub services: WifiService<R>,
    pub shops: ShopService<R>,
    pub reviews: ReviewService<R>,
}

impl<R> Directory<R>
where
    R: AreaRepository + WifiServiceRepository + ShopRepository + ReviewRepository,
{
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self {
        Self {
            areas: AreaService::new(repo.clone(), timeout),
            services: WifiService::new(repo.clone(), timeout),
            shops: ShopService::new(repo.clone(), timeout),
            reviews: ReviewService::new(repo, timeout),
        }
    }

    pub fn with_default_timeout(repo: Arc<R>) -> Self {
        Self::new(repo, DEFAULT_OPERATION_TIMEOUT)
    }
}
