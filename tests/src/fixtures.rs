//! The shop database used throughout the tests.
//!
//! `orders` holds the fields under edit. Its foreign keys point into
//! `products` (has an entity name field), `customers` (no name field) and
//! `brands`, whose only non-date fields are a code and a name.

use fieldmap::schema::{
    BaseType, Database, DatabaseId, DatabaseMetadata, Dimension, Field, FieldId, RemappingTable,
    SemanticType, Table, TableId, TableMetadata,
};
use fieldmap::FieldLocation;

pub const SHOP: DatabaseId = DatabaseId(1);

pub const ORDERS: TableId = TableId(1);
pub const PRODUCTS: TableId = TableId(2);
pub const CUSTOMERS: TableId = TableId(3);
pub const BRANDS: TableId = TableId(4);

// orders
pub const ORDER_ID: FieldId = FieldId(10);
pub const STATUS: FieldId = FieldId(11);
pub const PRODUCT_ID: FieldId = FieldId(12);
pub const NOTE: FieldId = FieldId(13);
pub const CREATED_AT: FieldId = FieldId(14);
pub const CUSTOMER_ID: FieldId = FieldId(15);
pub const BRAND_CODE: FieldId = FieldId(16);
pub const PRIORITY: FieldId = FieldId(17);

// products
pub const PRODUCT_PK: FieldId = FieldId(20);
pub const PRODUCT_LAUNCHED: FieldId = FieldId(21);
pub const PRODUCT_SKU: FieldId = FieldId(22);
pub const PRODUCT_TITLE: FieldId = FieldId(23);

// customers
pub const CUSTOMER_PK: FieldId = FieldId(30);
pub const CUSTOMER_EMAIL: FieldId = FieldId(31);
pub const CUSTOMER_SIGNUP: FieldId = FieldId(32);

// brands
pub const BRAND_FOUNDED: FieldId = FieldId(40);
pub const BRAND_KEY: FieldId = FieldId(41);
pub const BRAND_NAME: FieldId = FieldId(42);

pub fn at(field: FieldId) -> FieldLocation {
    FieldLocation::new(SHOP, ORDERS, field)
}

pub fn shop() -> DatabaseMetadata {
    DatabaseMetadata {
        database: Database {
            id: SHOP,
            name: "shop".to_string(),
        },
        tables: vec![orders(), products(), customers(), brands()],
    }
}

fn orders() -> TableMetadata {
    let order_id = field(ORDER_ID, ORDERS, "id", BaseType::Integer, SemanticType::PrimaryKey);

    // Known values, none mapped yet
    let mut status = Field::new(STATUS, ORDERS, "status", BaseType::Integer);
    status.remapping = RemappingTable::from_iter([(1i64, None), (2, None), (3, None)]);

    let mut product_id = foreign_key(PRODUCT_ID, "product_id", PRODUCT_PK);
    product_id.dimension = Dimension::External {
        target: Some(PRODUCT_TITLE),
    };

    let mut note = Field::new(NOTE, ORDERS, "note", BaseType::Text);
    note.remapping = RemappingTable::from_iter([("gift", None), ("rush", None)]);

    let created_at = Field::new(CREATED_AT, ORDERS, "created_at", BaseType::DateTime);

    let customer_id = foreign_key(CUSTOMER_ID, "customer_id", CUSTOMER_PK);
    let brand_code = foreign_key(BRAND_CODE, "brand_code", BRAND_KEY);

    // Already in custom mode with a complete table
    let mut priority = Field::new(PRIORITY, ORDERS, "priority", BaseType::Integer);
    priority.dimension = Dimension::Internal;
    priority.remapping = RemappingTable::from_iter([
        (1i64, Some("Low".to_string())),
        (2, Some("High".to_string())),
    ]);

    TableMetadata {
        table: Table::new(ORDERS, SHOP, "orders"),
        fields: vec![
            order_id,
            status,
            product_id,
            note,
            created_at,
            customer_id,
            brand_code,
            priority,
        ],
    }
}

fn products() -> TableMetadata {
    TableMetadata {
        table: Table::new(PRODUCTS, SHOP, "products"),
        fields: vec![
            field(PRODUCT_PK, PRODUCTS, "id", BaseType::Integer, SemanticType::PrimaryKey),
            Field::new(PRODUCT_LAUNCHED, PRODUCTS, "launched_at", BaseType::DateTime),
            Field::new(PRODUCT_SKU, PRODUCTS, "sku", BaseType::Text),
            field(PRODUCT_TITLE, PRODUCTS, "title", BaseType::Text, SemanticType::Name),
        ],
    }
}

fn customers() -> TableMetadata {
    TableMetadata {
        table: Table::new(CUSTOMERS, SHOP, "customers"),
        fields: vec![
            field(CUSTOMER_PK, CUSTOMERS, "id", BaseType::Integer, SemanticType::PrimaryKey),
            Field::new(CUSTOMER_EMAIL, CUSTOMERS, "email", BaseType::Text),
            Field::new(CUSTOMER_SIGNUP, CUSTOMERS, "signed_up_on", BaseType::Date),
        ],
    }
}

fn brands() -> TableMetadata {
    TableMetadata {
        table: Table::new(BRANDS, SHOP, "brands"),
        fields: vec![
            Field::new(BRAND_FOUNDED, BRANDS, "founded_on", BaseType::Date),
            Field::new(BRAND_KEY, BRANDS, "code", BaseType::Text),
            field(BRAND_NAME, BRANDS, "name", BaseType::Text, SemanticType::Name),
        ],
    }
}

fn field(id: FieldId, table: TableId, name: &str, base_type: BaseType, ty: SemanticType) -> Field {
    let mut field = Field::new(id, table, name, base_type);
    field.semantic_type = Some(ty);
    field
}

fn foreign_key(id: FieldId, name: &str, target: FieldId) -> Field {
    let mut field = field(id, ORDERS, name, BaseType::Integer, SemanticType::ForeignKey);
    field.fk_target_field_id = Some(target);
    field
}
