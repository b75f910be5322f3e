//! Built-in site content. This is the only place copy lives; both the grid
//! renderer and the detail modal read from here.

use crate::catalog::{Catalog, CatalogEntry, Feature, FeatureIcon, Product};

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

fn feature(icon: FeatureIcon, text: &str) -> Feature {
    Feature {
        icon,
        text: text.to_string(),
    }
}

impl Catalog {
    /// The static catalog shipped with the site.
    pub fn builtin() -> Catalog {
        Catalog::new(vec![vitrinas(), muebleria()])
    }
}

fn vitrinas() -> CatalogEntry {
    CatalogEntry {
        key: "vitrinas".to_string(),
        hero_title: "Calidad y Diseño en Vitrinas de Exhibición".to_string(),
        hero_subtitle: "Diseño y fabricación en Guadalajara. Soluciones de exhibición que \
                        realzan con elegancia el valor de sus productos."
            .to_string(),
        hero_image: "assets/img/glass_showcase_4.png".to_string(),
        products_title: "Nuestras Vitrinas".to_string(),
        products_subtitle: "Combinamos estética y funcionalidad para crear la solución de \
                            exhibición que necesita."
            .to_string(),
        products: vec![
            Product {
                img: "assets/img/glass_showcase_4.png".to_string(),
                title: "Mostradores".to_string(),
                desc: "Aprovecha el espacio con este mostrador de cristal, ideal para una \
                       exhibición segura con visibilidad total."
                    .to_string(),
                tags: tags(&["Visibilidad 360°", "Repisas Ajustables", "Estructura de Aluminio"]),
                images: Some(vec![
                    "assets/img/glass_showcase_4.png".to_string(),
                    "assets/img/glass_showcase_3.jpeg".to_string(),
                    "assets/img/glass_showcase_2.png".to_string(),
                ]),
                full_description: Some(
                    "Mostradores de cristal templado con estructura de aluminio anodizado. \
                     Fabricados a la medida de su local, con repisas ajustables y opción de \
                     cajones con cerradura."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Search, "Visibilidad total del producto"),
                    feature(FeatureIcon::Lock, "Puertas corredizas con cerradura"),
                    feature(FeatureIcon::Box, "Entrega e instalación incluidas"),
                ]),
                price: Some("$4,900 MXN".to_string()),
                delivery: Some("Entrega estimada: 7-10 días hábiles.".to_string()),
                category: Some(0),
            },
            Product {
                img: "assets/img/glass_showcase_3.jpeg".to_string(),
                title: "Exhibidores".to_string(),
                desc: "Soluciones versátiles y a medida para su punto de venta, incluyendo \
                       mostradores, islas y estanterías adaptadas."
                    .to_string(),
                tags: tags(&["A Medida", "Mobiliario Comercial", "Optimización de Espacio"]),
                images: None,
                full_description: Some(
                    "Exhibidores diseñados alrededor de su punto de venta: islas centrales, \
                     estanterías murales y módulos combinados. Cada proyecto se cotiza según \
                     dimensiones y materiales."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Lightbulb, "Diseño personalizado sin costo"),
                    feature(FeatureIcon::Box, "Materiales comerciales de alta resistencia"),
                ]),
                price: None,
                delivery: None,
                category: Some(0),
            },
            Product {
                img: "assets/img/glass_showcase_2.png".to_string(),
                title: "Vitrinas Iluminadas".to_string(),
                desc: "Con iluminación LED integrada para realzar sus productos. Perfecta \
                       para joyerías, ópticas y artículos coleccionables."
                    .to_string(),
                tags: tags(&["Iluminación LED", "Realce de Producto", "Bajo Consumo"]),
                images: Some(vec![
                    "assets/img/glass_showcase_2.png".to_string(),
                    "assets/img/glass_showcase_4.png".to_string(),
                ]),
                full_description: Some(
                    "Vitrinas con iluminación LED de bajo consumo integrada en la estructura, \
                     pensadas para joyería, óptica y coleccionables. Luz cálida o fría según \
                     el producto a exhibir."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Lightbulb, "LED integrado de bajo consumo"),
                    feature(FeatureIcon::Search, "Cristal ultra claro antirreflejo"),
                    feature(FeatureIcon::Lock, "Cerradura de seguridad"),
                ]),
                price: Some("$6,500 MXN".to_string()),
                delivery: Some("Entrega estimada: 10-12 días hábiles.".to_string()),
                category: Some(0),
            },
        ],
    }
}

fn muebleria() -> CatalogEntry {
    CatalogEntry {
        key: "muebleria".to_string(),
        hero_title: "Carpintería profesional y a la Medida".to_string(),
        hero_subtitle: "Transformamos espacios con soluciones en madera y otros materiales, \
                        diseñadas y fabricadas en Guadalajara."
            .to_string(),
        hero_image: "assets/img/mueble.png".to_string(),
        products_title: "Proyectos de Carpintería a Medida".to_string(),
        products_subtitle: "Diseñamos y fabricamos piezas funcionales que se integran \
                            perfectamente a su espacio, ya sea residencial o de negocio."
            .to_string(),
        products: vec![
            Product {
                img: "assets/img/mueble7.png".to_string(),
                title: "Cocinas Integrales".to_string(),
                desc: "Cocinas diseñadas y fabricadas a tu medida. Maximizamos el espacio \
                       con materiales duraderos y funcionales."
                    .to_string(),
                tags: tags(&["Personalizado", "Optimización de Espacio", "Herrajes"]),
                images: Some(vec![
                    "assets/img/mueble7.png".to_string(),
                    "assets/img/mueble.png".to_string(),
                ]),
                full_description: Some(
                    "Cocinas integrales fabricadas a la medida exacta de su espacio, con \
                     cubiertas y herrajes de primera línea. Incluye visita de medición y \
                     propuesta de diseño."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Lightbulb, "Propuesta de diseño incluida"),
                    feature(FeatureIcon::Box, "Herrajes con cierre suave"),
                ]),
                price: None,
                delivery: Some("Tiempo de fabricación: 3-4 semanas.".to_string()),
                category: Some(1),
            },
            Product {
                img: "assets/img/mueble4.jpg".to_string(),
                title: "Clósets y Vestidores".to_string(),
                desc: "Soluciones de almacenamiento prácticas. Diseñamos interiores según \
                       lo que necesitas guardar y organizar."
                    .to_string(),
                tags: tags(&["Almacenamiento", "Interiores a Medida", "Acabados Diversos"]),
                images: None,
                full_description: Some(
                    "Clósets y vestidores con interiores distribuidos según su uso real: \
                     cajoneras, zapateras, barras dobles y accesorios. Acabados en melamina \
                     o madera natural."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Box, "Interiores configurables"),
                    feature(FeatureIcon::Search, "Medición a domicilio"),
                ]),
                price: None,
                delivery: None,
                category: Some(1),
            },
            Product {
                img: "assets/img/mueble3.png".to_string(),
                title: "Mobiliario Residencial".to_string(),
                desc: "Mesas, sillas y bancas resistentes para tu hogar. Calidad y diseño \
                       adaptado a tus espacios."
                    .to_string(),
                tags: tags(&["Durabilidad", "Diseño Personalizado", "Fabricación a Medida"]),
                images: None,
                full_description: Some(
                    "Piezas residenciales en madera maciza y materiales mixtos: mesas de \
                     comedor, bancas, centros de entretenimiento. Fabricación artesanal con \
                     acabados duraderos."
                        .to_string(),
                ),
                features: Some(vec![
                    feature(FeatureIcon::Lightbulb, "Diseño adaptado a su espacio"),
                    feature(FeatureIcon::Box, "Madera seleccionada y sellada"),
                ]),
                price: Some("$2,800 MXN".to_string()),
                delivery: None,
                category: Some(1),
            },
        ],
    }
}
