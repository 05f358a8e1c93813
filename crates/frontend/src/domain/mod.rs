pub mod a001_item_type;
pub mod a002_item;
pub mod a003_category;
pub mod a004_family;
pub mod a005_attribute_group;
pub mod a006_association;
pub mod a007_localization;
