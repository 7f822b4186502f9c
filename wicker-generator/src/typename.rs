//! Canonical type name helpers. Type names are dotted paths
//! (`example.coffee.Pump`); provider wrappers and generic signatures are
//! recognized structurally, without consulting the element store.

/// Returns true if the name carries a type-argument signature. Generic
/// names never contribute assignable-type entries.
pub fn is_generic(type_name: &str) -> bool {
    type_name.contains('<')
}

/// The segment after the last `.`, with any type arguments stripped.
pub fn simple_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit('.').next().unwrap_or(base)
}

/// Unwraps `Provider<T>` to `T`. Any other name is returned unchanged,
/// including non-provider generics.
pub fn unwrap_provider(type_name: &str) -> &str {
    if let Some(open) = type_name.find('<') {
        if type_name.ends_with('>') && simple_name(&type_name[..open]) == "Provider" {
            return type_name[open + 1..type_name.len() - 1].trim();
        }
    }
    type_name
}
