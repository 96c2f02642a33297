//! Injection zones: the fixed places in the dashboard where an extension may
//! contribute widgets.
//!
//! Zones form a closed set. Manifests name them by their dotted id
//! (`order.details.before`); an id outside the set is rejected when the
//! manifest is parsed rather than silently ignored at render time.

use crate::error::PluginError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! injection_zones {
    ($($variant:ident => $id:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum InjectionZone {
            $($variant,)+
        }

        impl InjectionZone {
            /// Every zone, in the order the dashboard declares them.
            pub const ALL: &'static [InjectionZone] = &[$(InjectionZone::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(InjectionZone::$variant => $id,)+
                }
            }
        }

        impl FromStr for InjectionZone {
            type Err = PluginError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(InjectionZone::$variant),)+
                    other => Err(PluginError::UnknownZone(other.to_string())),
                }
            }
        }
    };
}

injection_zones! {
    OrderDetailsBefore => "order.details.before",
    OrderDetailsAfter => "order.details.after",
    OrderDetailsSideBefore => "order.details.side.before",
    OrderDetailsSideAfter => "order.details.side.after",
    OrderListBefore => "order.list.before",
    OrderListAfter => "order.list.after",

    DraftOrderListBefore => "draft_order.list.before",
    DraftOrderListAfter => "draft_order.list.after",
    DraftOrderDetailsSideBefore => "draft_order.details.side.before",
    DraftOrderDetailsSideAfter => "draft_order.details.side.after",
    DraftOrderDetailsBefore => "draft_order.details.before",
    DraftOrderDetailsAfter => "draft_order.details.after",

    CustomerDetailsBefore => "customer.details.before",
    CustomerDetailsAfter => "customer.details.after",
    CustomerListBefore => "customer.list.before",
    CustomerListAfter => "customer.list.after",

    CustomerGroupDetailsBefore => "customer_group.details.before",
    CustomerGroupDetailsAfter => "customer_group.details.after",
    CustomerGroupListBefore => "customer_group.list.before",
    CustomerGroupListAfter => "customer_group.list.after",

    ProductDetailsBefore => "product.details.before",
    ProductDetailsAfter => "product.details.after",
    ProductListBefore => "product.list.before",
    ProductListAfter => "product.list.after",
    ProductDetailsSideBefore => "product.details.side.before",
    ProductDetailsSideAfter => "product.details.side.after",

    ProductCollectionDetailsBefore => "product_collection.details.before",
    ProductCollectionDetailsAfter => "product_collection.details.after",
    ProductCollectionListBefore => "product_collection.list.before",
    ProductCollectionListAfter => "product_collection.list.after",

    ProductCategoryDetailsBefore => "product_category.details.before",
    ProductCategoryDetailsAfter => "product_category.details.after",
    ProductCategoryDetailsSideBefore => "product_category.details.side.before",
    ProductCategoryDetailsSideAfter => "product_category.details.side.after",
    ProductCategoryListBefore => "product_category.list.before",
    ProductCategoryListAfter => "product_category.list.after",

    PriceListDetailsBefore => "price_list.details.before",
    PriceListDetailsAfter => "price_list.details.after",
    PriceListDetailsSideBefore => "price_list.details.side.before",
    PriceListDetailsSideAfter => "price_list.details.side.after",
    PriceListListBefore => "price_list.list.before",
    PriceListListAfter => "price_list.list.after",

    PromotionDetailsBefore => "promotion.details.before",
    PromotionDetailsAfter => "promotion.details.after",
    PromotionDetailsSideBefore => "promotion.details.side.before",
    PromotionDetailsSideAfter => "promotion.details.side.after",
    PromotionListBefore => "promotion.list.before",
    PromotionListAfter => "promotion.list.after",

    GiftCardDetailsBefore => "gift_card.details.before",
    GiftCardDetailsAfter => "gift_card.details.after",
    GiftCardListBefore => "gift_card.list.before",
    GiftCardListAfter => "gift_card.list.after",
    CustomGiftCardBefore => "custom_gift_card.before",
    CustomGiftCardAfter => "custom_gift_card.after",

    UserDetailsBefore => "user.details.before",
    UserDetailsAfter => "user.details.after",
    UserListBefore => "user.list.before",
    UserListAfter => "user.list.after",

    StoreDetailsBefore => "store.details.before",
    StoreDetailsAfter => "store.details.after",

    ProfileDetailsBefore => "profile.details.before",
    ProfileDetailsAfter => "profile.details.after",

    RegionDetailsBefore => "region.details.before",
    RegionDetailsAfter => "region.details.after",
    RegionListBefore => "region.list.before",
    RegionListAfter => "region.list.after",

    ShippingProfileDetailsBefore => "shipping_profile.details.before",
    ShippingProfileDetailsAfter => "shipping_profile.details.after",
    ShippingProfileListBefore => "shipping_profile.list.before",
    ShippingProfileListAfter => "shipping_profile.list.after",

    LocationDetailsBefore => "location.details.before",
    LocationDetailsAfter => "location.details.after",
    LocationDetailsSideBefore => "location.details.side.before",
    LocationDetailsSideAfter => "location.details.side.after",
    LocationListBefore => "location.list.before",
    LocationListAfter => "location.list.after",

    LoginBefore => "login.before",
    LoginAfter => "login.after",

    SalesChannelDetailsBefore => "sales_channel.details.before",
    SalesChannelDetailsAfter => "sales_channel.details.after",
    SalesChannelListBefore => "sales_channel.list.before",
    SalesChannelListAfter => "sales_channel.list.after",

    ReservationDetailsBefore => "reservation.details.before",
    ReservationDetailsAfter => "reservation.details.after",
    ReservationDetailsSideBefore => "reservation.details.side.before",
    ReservationDetailsSideAfter => "reservation.details.side.after",
    ReservationListBefore => "reservation.list.before",
    ReservationListAfter => "reservation.list.after",

    ApiKeyDetailsBefore => "api_key.details.before",
    ApiKeyDetailsAfter => "api_key.details.after",
    ApiKeyListBefore => "api_key.list.before",
    ApiKeyListAfter => "api_key.list.after",

    WorkflowDetailsBefore => "workflow.details.before",
    WorkflowDetailsAfter => "workflow.details.after",
    WorkflowListBefore => "workflow.list.before",
    WorkflowListAfter => "workflow.list.after",

    CampaignDetailsBefore => "campaign.details.before",
    CampaignDetailsAfter => "campaign.details.after",
    CampaignDetailsSideBefore => "campaign.details.side.before",
    CampaignDetailsSideAfter => "campaign.details.side.after",
    CampaignListBefore => "campaign.list.before",
    CampaignListAfter => "campaign.list.after",

    TaxDetailsBefore => "tax.details.before",
    TaxDetailsAfter => "tax.details.after",
    TaxListBefore => "tax.list.before",
    TaxListAfter => "tax.list.after",

    ProductTypeDetailsBefore => "product_type.details.before",
    ProductTypeDetailsAfter => "product_type.details.after",
    ProductTypeListBefore => "product_type.list.before",
    ProductTypeListAfter => "product_type.list.after",
}

impl fmt::Display for InjectionZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InjectionZone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InjectionZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
