//! Manual single-product creation, the spreadsheet-free counterpart of the
//! bulk import.

use clap::Args;
use tienda_core::Product;

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Product code (the store-wide identity)
    pub(crate) code: String,
    /// Display name
    pub(crate) name: String,
    /// Product category, e.g. CABLE or CONECTOR
    #[arg(long = "type")]
    pub(crate) product_type: Option<String>,
    #[arg(long)]
    pub(crate) brand: Option<String>,
    #[arg(long)]
    pub(crate) provider: Option<String>,
    #[arg(long)]
    pub(crate) group: Option<String>,
    #[arg(long)]
    pub(crate) line: Option<String>,
    /// Image URL; the store substitutes a placeholder when omitted
    #[arg(long)]
    pub(crate) image: Option<String>,
    /// Datasheet URL
    #[arg(long)]
    pub(crate) datasheet: Option<String>,
    #[arg(long)]
    pub(crate) price: Option<f64>,
    #[arg(long)]
    pub(crate) stock: Option<u32>,
}

impl CreateArgs {
    fn into_product(self) -> Product {
        let mut product = Product::new(self.code, self.name);
        product.product_type = self.product_type;
        product.brand = self.brand;
        product.provider = self.provider;
        product.group = self.group;
        product.line = self.line;
        product.image = self.image;
        product.datasheet = self.datasheet;
        product.price = self.price;
        product.stock = self.stock;
        product
    }
}

/// Create one product in the store from command-line attributes.
///
/// # Errors
///
/// Returns an error if a product with the same code already exists, or if
/// the existence probe or the create call fails.
pub(crate) async fn run_create(args: CreateArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let client = super::api_client(&config)?;

    let product = args.into_product();
    if client.product_exists(&product.code).await? {
        anyhow::bail!("product {} already exists in the store", product.code);
    }
    client.create_product(&product).await?;

    println!("created {} — {}", product.code, product.name);
    Ok(())
}
