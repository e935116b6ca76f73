use std::fmt;

use indexmap::IndexMap;

use crate::internal_prelude::*;

/// A decoded Scrypto payload, indexed by the custom values embedded in it.
///
/// The indices are built once, on construction, by a pre-order traversal of the value
/// tree - higher layers can then enumerate the payload's references and owned nodes
/// without re-walking it.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexedScryptoValue {
    bytes: Vec<u8>,
    value: ScryptoValue,
    custom_values: Vec<(SborPath, ScryptoCustomValue)>,
    references: Vec<NodeId>,
    owned_nodes: Vec<NodeId>,
}

impl IndexedScryptoValue {
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let value = scrypto_decode(&bytes)?;
        Ok(Self::index(bytes, value))
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
        Self::from_vec(slice.to_vec())
    }

    pub fn from_typed<T: ScryptoEncode + ?Sized>(value: &T) -> Self {
        let bytes = scrypto_encode(value).expect("Failed to encode trusted Rust value");
        Self::from_vec(bytes).expect("Failed to index trusted Rust value")
    }

    pub fn from_value(value: ScryptoValue) -> Result<Self, EncodeError> {
        let bytes = scrypto_encode(&value)?;
        Ok(Self::index(bytes, value))
    }

    pub fn unit() -> Self {
        Self::from_typed(&())
    }

    fn index(bytes: Vec<u8>, value: ScryptoValue) -> Self {
        let mut visitor = IndexBuildingVisitor::default();
        match traverse_any(&mut SborPathBuf::new(), &value, &mut visitor) {
            Ok(()) => {}
            Err(infallible) => match infallible {},
        }
        Self {
            bytes,
            value,
            custom_values: visitor.custom_values,
            references: visitor.references,
            owned_nodes: visitor.owned_nodes,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_value(&self) -> &ScryptoValue {
        &self.value
    }

    pub fn into_value(self) -> ScryptoValue {
        self.value
    }

    pub fn into_payload_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_typed<T: ScryptoDecode>(&self) -> Result<T, DecodeError> {
        scrypto_decode(&self.bytes)
    }

    /// Every custom value in the payload, with its path, in pre-order.
    pub fn custom_values(&self) -> &[(SborPath, ScryptoCustomValue)] {
        &self.custom_values
    }

    /// The nodes referenced by the payload, in pre-order.
    pub fn references(&self) -> &Vec<NodeId> {
        &self.references
    }

    /// The nodes owned by the payload, in pre-order.
    pub fn owned_nodes(&self) -> &Vec<NodeId> {
        &self.owned_nodes
    }

    /// Rewrites every [`ManifestBlobRef`] and [`ManifestExpression`] placeholder with
    /// its concrete value, re-encoding and re-indexing the payload.
    pub fn replace_placeholders(
        self,
        replacements: &PlaceholderReplacements,
    ) -> Result<Self, ReplacePlaceholdersError> {
        let mut value = self.value;
        replace_placeholders_in_value(&mut value, replacements)?;
        let bytes = scrypto_encode(&value)?;
        Ok(Self::index(bytes, value))
    }
}

impl fmt::Debug for IndexedScryptoValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexedScryptoValue({})", hex::encode(&self.bytes))
    }
}

#[derive(Default)]
struct IndexBuildingVisitor {
    custom_values: Vec<(SborPath, ScryptoCustomValue)>,
    references: Vec<NodeId>,
    owned_nodes: Vec<NodeId>,
}

impl CustomValueVisitor<ScryptoCustomValue> for IndexBuildingVisitor {
    type Err = core::convert::Infallible;

    fn visit(
        &mut self,
        path: &mut SborPathBuf,
        value: &ScryptoCustomValue,
    ) -> Result<(), Self::Err> {
        match value {
            ScryptoCustomValue::Reference(reference) => self.references.push(reference.0),
            ScryptoCustomValue::Own(own) => self.owned_nodes.push(own.0),
            _ => {}
        }
        self.custom_values.push((path.clone().into(), value.clone()));
        Ok(())
    }
}

/// Decodes a payload and returns the nodes it owns, in pre-order.
pub fn read_owned_nodes(payload: &[u8]) -> Result<Vec<NodeId>, DecodeError> {
    Ok(IndexedScryptoValue::from_slice(payload)?.owned_nodes.clone())
}

/// Decodes a payload, resolves its manifest placeholders and re-encodes it.
pub fn replace_manifest_values(
    payload: &[u8],
    replacements: &PlaceholderReplacements,
) -> Result<Vec<u8>, ReplacePlaceholdersError> {
    Ok(IndexedScryptoValue::from_slice(payload)?
        .replace_placeholders(replacements)?
        .into_payload_bytes())
}

/// The concrete values manifest placeholders resolve to.
pub struct PlaceholderReplacements<'a> {
    pub blobs: &'a IndexMap<Hash, Vec<u8>>,
    pub entire_worktop: &'a [Own],
    pub entire_auth_zone: &'a [Own],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplacePlaceholdersError {
    #[error("The payload failed to decode: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("No blob is registered for hash {0}")]
    BlobNotFound(Hash),

    #[error("The rewritten payload failed to re-encode: {0}")]
    EncodeError(#[from] EncodeError),
}

fn replace_placeholders_in_value(
    value: &mut ScryptoValue,
    replacements: &PlaceholderReplacements,
) -> Result<(), ReplacePlaceholdersError> {
    if let Value::Custom { value: custom } = value {
        if let Some(replacement) = placeholder_replacement(custom, replacements)? {
            *value = replacement;
        }
        return Ok(());
    }
    match value {
        Value::Enum { fields, .. } | Value::Tuple { fields } => {
            for field in fields {
                replace_placeholders_in_value(field, replacements)?;
            }
        }
        Value::Array {
            element_value_kind,
            elements,
        } => {
            for element in elements {
                replace_placeholders_in_value(element, replacements)?;
            }
            replace_placeholder_value_kind(element_value_kind);
        }
        Value::Map {
            key_value_kind,
            value_value_kind,
            entries,
        } => {
            for (key, entry_value) in entries {
                replace_placeholders_in_value(key, replacements)?;
                replace_placeholders_in_value(entry_value, replacements)?;
            }
            replace_placeholder_value_kind(key_value_kind);
            replace_placeholder_value_kind(value_value_kind);
        }
        _ => {}
    }
    Ok(())
}

fn placeholder_replacement(
    custom: &ScryptoCustomValue,
    replacements: &PlaceholderReplacements,
) -> Result<Option<ScryptoValue>, ReplacePlaceholdersError> {
    match custom {
        ScryptoCustomValue::Blob(blob_ref) => {
            let blob = replacements
                .blobs
                .get(&blob_ref.0)
                .ok_or(ReplacePlaceholdersError::BlobNotFound(blob_ref.0))?;
            Ok(Some(Value::Array {
                element_value_kind: ValueKind::U8,
                elements: blob.iter().map(|byte| Value::U8 { value: *byte }).collect(),
            }))
        }
        ScryptoCustomValue::Expression(expression) => {
            let owns = match expression {
                ManifestExpression::EntireWorktop => replacements.entire_worktop,
                ManifestExpression::EntireAuthZone => replacements.entire_auth_zone,
            };
            Ok(Some(Value::Array {
                element_value_kind: ValueKind::Custom(ScryptoCustomValueKind::Own),
                elements: owns
                    .iter()
                    .map(|own| Value::Custom {
                        value: ScryptoCustomValue::Own(*own),
                    })
                    .collect(),
            }))
        }
        _ => Ok(None),
    }
}

// A placeholder's replacement is always an Array, so a homogeneous collection of
// placeholders stays homogeneous after rewriting.
fn replace_placeholder_value_kind(value_kind: &mut ScryptoValueKind) {
    match value_kind {
        ValueKind::Custom(ScryptoCustomValueKind::Blob)
        | ValueKind::Custom(ScryptoCustomValueKind::Expression) => {
            *value_kind = ValueKind::Array;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault_own(seed: u8) -> Own {
        Own(NodeId::new(
            EntityType::InternalFungibleVault,
            &[seed; NodeId::UUID_LENGTH],
        ))
    }

    fn package_reference(seed: u8) -> Reference {
        Reference(NodeId::new(
            EntityType::GlobalPackage,
            &[seed; NodeId::UUID_LENGTH],
        ))
    }

    #[test]
    fn references_and_owned_nodes_are_indexed_in_document_order() {
        let typed = (
            package_reference(1),
            vec![vault_own(2), vault_own(3)],
            (package_reference(4), 5u8),
        );
        let indexed = IndexedScryptoValue::from_typed(&typed);

        assert_eq!(
            indexed.references(),
            &vec![package_reference(1).0, package_reference(4).0]
        );
        assert_eq!(
            indexed.owned_nodes(),
            &vec![vault_own(2).0, vault_own(3).0]
        );
        assert_eq!(read_owned_nodes(indexed.as_slice()), Ok(indexed.owned_nodes().clone()));
    }

    #[test]
    fn custom_values_carry_their_paths() {
        let typed = (42u8, (package_reference(7), Decimal::ONE));
        let indexed = IndexedScryptoValue::from_typed(&typed);

        let custom_values = indexed.custom_values();
        assert_eq!(custom_values.len(), 2);
        assert_eq!(custom_values[0].0, SborPath::new(vec![1, 0]));
        assert_eq!(
            custom_values[0].1,
            ScryptoCustomValue::Reference(package_reference(7))
        );
        assert_eq!(custom_values[1].0, SborPath::new(vec![1, 1]));
        assert_eq!(custom_values[1].1, ScryptoCustomValue::Decimal(Decimal::ONE));
    }

    #[test]
    fn blob_placeholders_are_replaced_with_their_contents() {
        let blob_hash = Hash([7u8; Hash::LENGTH]);
        let indexed = IndexedScryptoValue::from_typed(&(ManifestBlobRef(blob_hash), 5u8));

        let mut blobs = IndexMap::new();
        blobs.insert(blob_hash, vec![1u8, 2u8, 3u8]);
        let replaced = indexed
            .replace_placeholders(&PlaceholderReplacements {
                blobs: &blobs,
                entire_worktop: &[],
                entire_auth_zone: &[],
            })
            .unwrap();

        assert_eq!(
            replaced.into_typed::<(Vec<u8>, u8)>(),
            Ok((vec![1u8, 2u8, 3u8], 5u8))
        );
    }

    #[test]
    fn unknown_blob_hashes_are_an_error() {
        let blob_hash = Hash([7u8; Hash::LENGTH]);
        let indexed = IndexedScryptoValue::from_typed(&ManifestBlobRef(blob_hash));

        let result = indexed.replace_placeholders(&PlaceholderReplacements {
            blobs: &IndexMap::new(),
            entire_worktop: &[],
            entire_auth_zone: &[],
        });
        assert_eq!(
            result,
            Err(ReplacePlaceholdersError::BlobNotFound(blob_hash))
        );
    }

    #[test]
    fn expressions_are_replaced_with_owned_nodes() {
        let worktop = [vault_own(1), vault_own(2)];
        let indexed = IndexedScryptoValue::from_typed(&(ManifestExpression::EntireWorktop,));

        let replaced = indexed
            .replace_placeholders(&PlaceholderReplacements {
                blobs: &IndexMap::new(),
                entire_worktop: &worktop,
                entire_auth_zone: &[],
            })
            .unwrap();

        assert_eq!(replaced.owned_nodes(), &vec![vault_own(1).0, vault_own(2).0]);
        assert_eq!(
            replaced.into_typed::<(Vec<Own>,)>(),
            Ok((worktop.to_vec(),))
        );
    }

    #[test]
    fn arrays_of_placeholders_stay_homogeneous_after_replacement() {
        let blob_hash = Hash([9u8; Hash::LENGTH]);
        let indexed =
            IndexedScryptoValue::from_typed(&vec![ManifestBlobRef(blob_hash), ManifestBlobRef(blob_hash)]);

        let mut blobs = IndexMap::new();
        blobs.insert(blob_hash, vec![0xAAu8]);
        let replaced_payload = replace_manifest_values(
            indexed.as_slice(),
            &PlaceholderReplacements {
                blobs: &blobs,
                entire_worktop: &[],
                entire_auth_zone: &[],
            },
        )
        .unwrap();

        assert_eq!(
            scrypto_decode::<Vec<Vec<u8>>>(&replaced_payload),
            Ok(vec![vec![0xAAu8], vec![0xAAu8]])
        );
    }
}
