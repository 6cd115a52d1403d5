use hemoline_shared::Product;

/// Seed catalog: the fixed blood-product list loaded at process start.
pub fn product_list() -> Vec<Product> {
    vec![
        Product::new(0, "RBC A+ Adult", 700),
        Product::new(1, "RBC B+ Adult", 700),
        Product::new(2, "RBC AB+ Adult", 750),
        Product::new(3, "RBC O- Adult", 680),
        Product::new(4, "RBC A+ Child", 350),
        Product::new(5, "RBC AB+ Child", 200),
        Product::new(6, "PLT AB+", 120),
        Product::new(7, "PLT O+", 80),
        Product::new(8, "CRYO A+", 40),
        Product::new(9, "CRYO AB+", 80),
        Product::new(10, "FFP A+", 300),
        Product::new(11, "FFP B+", 300),
        Product::new(12, "FFP AB+", 300),
    ]
}
