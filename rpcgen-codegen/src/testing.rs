//! Schema fixtures shared by the backend tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use rpcgen_schema::{Field, GeneratorOptions, Message, Schema, Service};

use crate::naming::NamingContext;

/// `Billing { Charge(CreditCard) -> Receipt }` in package `billing`.
pub fn billing() -> Schema {
    let mut schema = Schema::new("billing.proto")
        .with_package("billing")
        .with_java_package("org.example.billing");
    let card = schema.add_message(
        Message::new("CreditCard")
            .field(Field::new("number", "string", 1))
            .field(Field::new("cvc", "int32", 2)),
    );
    let receipt = schema.add_message(Message::new("Receipt").field(Field::new("id", "string", 1)));
    schema.add_service(Service::new("Billing").method("Charge", card, receipt));
    schema
}

/// Two services sharing message types, including a method whose input and
/// output are the same message.
pub fn orders() -> Schema {
    let mut schema = Schema::new("shop/orders.proto")
        .with_package("shop")
        .with_java_package("org.example.shop");
    let order = schema.add_message(Message::new("Order"));
    let receipt = schema.add_message(Message::new("Receipt"));
    let list = schema.add_message(Message::new("OrderList"));
    schema.add_service(
        Service::new("Orders")
            .method("Get", order, receipt)
            .method("List", order, list)
            .method("Touch", order, order),
    );
    schema.add_service(Service::new("Receipts").method("Find", receipt, receipt));
    schema
}

/// A schema without any package, so every namespace is empty.
pub fn unpackaged() -> Schema {
    let mut schema = Schema::new("ping.proto");
    let ping = schema.add_message(Message::new("Ping"));
    let pong = schema.add_message(Message::new("Pong"));
    schema.add_service(Service::new("Health").method("Check", ping, pong));
    schema
}

/// Naming context of `schema` with default options.
pub fn names(schema: &Schema) -> NamingContext {
    NamingContext::build(schema, &GeneratorOptions::default())
}
