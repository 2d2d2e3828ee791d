use anyhow::{Result, bail};
use appflow::RESOURCE_TYPES;

/// Prints the supported resource types, or the property table of `resource_type`.
///
/// # Errors
/// Returns an error if `resource_type` is not a supported type.
pub fn print_schema(resource_type: Option<&str>) -> Result<()> {
    let Some(resource_type) = resource_type else {
        println!("{:<35} {:<9} {}", "Type", "Taggable", "Attributes");
        println!("{:-<80}", "");
        for schema in RESOURCE_TYPES {
            let taggable = if schema.taggable { "yes" } else { "no" };
            println!(
                "{:<35} {:<9} {}",
                schema.resource_type,
                taggable,
                schema.attributes.join(", ")
            );
        }
        return Ok(());
    };

    let Some(schema) = appflow::schema(resource_type) else {
        let known: Vec<_> = RESOURCE_TYPES.iter().map(|s| s.resource_type).collect();
        bail!("Unknown resource type '{resource_type}' (supported: {})", known.join(", "));
    };

    println!("{}\n", schema.resource_type);
    println!("{:<30} {:<40} {}", "Property", "Type", "Required");
    println!("{:-<80}", "");
    for property in schema.properties {
        let required = if property.required { "yes" } else { "no" };
        println!("{:<30} {:<40} {}", property.key, property.type_name, required);
    }
    if !schema.attributes.is_empty() {
        println!("\nAttributes: {}", schema.attributes.join(", "));
    }
    Ok(())
}
