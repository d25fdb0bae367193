//! Cart command handlers.
//!
//! Every mutation follows the same load/mutate/persist shape around
//! [`CartStore`]. Adding a product fetches its current details from the
//! store so prices in the cart reflect the remote catalog at add time.

use tienda_core::CartStore;

/// Add `quantity` units of the product identified by `code`.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or the cart cannot be
/// loaded or persisted.
pub(crate) async fn run_add(code: &str, quantity: u32) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let client = super::api_client(&config)?;
    let detail = client.get_by_code(code).await?;

    let mut cart = CartStore::load(&config.cart_path)?;
    cart.add(detail.product, quantity);
    cart.persist()?;

    println!("added {quantity} x {code} to the cart");
    Ok(())
}

/// Remove the line for `code` from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded or persisted.
pub(crate) fn run_remove(code: &str) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let mut cart = CartStore::load(&config.cart_path)?;
    if cart.remove(code) {
        cart.persist()?;
        println!("removed {code} from the cart");
    } else {
        println!("{code} is not in the cart");
    }
    Ok(())
}

/// Set the exact quantity for `code`; zero removes the line.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded or persisted.
pub(crate) fn run_set(code: &str, quantity: u32) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let mut cart = CartStore::load(&config.cart_path)?;
    if cart.set_quantity(code, quantity) {
        cart.persist()?;
        if quantity == 0 {
            println!("removed {code} from the cart");
        } else {
            println!("set {code} to {quantity}");
        }
    } else {
        println!("{code} is not in the cart");
    }
    Ok(())
}

/// Print the cart contents and total.
///
/// # Errors
///
/// Returns an error if the cart cannot be loaded.
pub(crate) fn run_list() -> anyhow::Result<()> {
    let config = super::load_config()?;
    let cart = CartStore::load(&config.cart_path)?;
    if cart.is_empty() {
        println!("the cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        let price = item
            .product
            .price
            .map_or_else(|| "-".to_owned(), |p| format!("{p:.2}"));
        println!(
            "{:>4} x {}  {}  ({price})",
            item.quantity, item.product.code, item.product.name
        );
    }
    println!("total: {:.2}", cart.total());
    Ok(())
}
