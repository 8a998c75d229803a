//! Outbound links for CURIEs.
//!
//! Maps a `PREFIX:LOCALID` identifier to the page of the source database
//! that owns it, so reviewers can check the original record. Unknown
//! prefixes fall back to a Biolink model search.

/// Fallback for prefixes missing from [`link_template`].
const BIOLINK_SEARCH_URL: &str = "https://biolink.github.io/biolink-model/?curie=";

/// OLS4 class page prefix with the IRI double-percent-encoded
/// (`http://purl.obolibrary.org/obo/` -> `http%253A%252F%252F...`).
const OLS4_OBO_CLASS: &str = "http%253A%252F%252Fpurl.obolibrary.org%252Fobo%252F";

/// Return the external browse URL for `curie`.
///
/// Returns an empty string if `curie` has no `:` separator. The prefix is
/// matched case-insensitively.
pub fn resolve_link(curie: &str) -> String {
    let Some((prefix, local_id)) = curie.split_once(':') else {
        return String::new();
    };

    link_template(&prefix.to_uppercase(), local_id, curie)
        .unwrap_or_else(|| format!("{BIOLINK_SEARCH_URL}{curie}"))
}

fn link_template(prefix: &str, id: &str, curie: &str) -> Option<String> {
    let url = match prefix {
        "UMLS"             => format!("https://uts.nlm.nih.gov/uts/umls/concept/{id}"),
        "MONDO"            => format!("https://www.ebi.ac.uk/ols4/ontologies/mondo/classes/{OLS4_OBO_CLASS}MONDO_{id}"),
        "CHEBI"            => format!("https://www.ebi.ac.uk/chebi/searchId.do?chebiId=CHEBI:{id}"),
        "DRUGBANK"         => format!("https://go.drugbank.com/drugs/{id}"),
        "DRUGCENTRAL"      => format!("https://drugcentral.org/drugcard/{id}"),
        "MESH"             => format!("https://meshb.nlm.nih.gov/record/ui?ui={id}"),
        "NCIT"             => format!("https://ncit.nci.nih.gov/ncitbrowser/ConceptReport.jsp?dictionary=NCI_Thesaurus&code={id}"),
        "DOID"             => format!("https://disease-ontology.org/?id=DOID:{id}"),
        "HP"               => format!("https://hpo.jax.org/app/browse/term/{curie}"),
        "HGNC"             => format!("https://www.genenames.org/data/gene-symbol-report/#!/hgnc_id/HGNC:{id}"),
        "NCBIGENE"         => format!("https://www.ncbi.nlm.nih.gov/gene/{id}"),
        "UNIPROT"
        | "UNIPROTKB"      => format!("https://www.uniprot.org/uniprot/{id}"),
        "ENSEMBL"          => format!("https://useast.ensembl.org/id/{id}"),
        "PUBCHEM.COMPOUND" => format!("https://pubchem.ncbi.nlm.nih.gov/compound/{id}"),
        "CHEMBL.COMPOUND"  => format!("https://www.ebi.ac.uk/chembl/compound_report_card/{id}"),
        "RXCUI"            => format!("https://mor.nlm.nih.gov/RxNav/search?searchBy=RXCUI&searchTerm={id}"),
        "UNII"             => format!("https://precision.fda.gov/uniisearch/srs/unii/{id}"),
        "PR"               => format!(
            "https://www.ebi.ac.uk/ols4/ontologies/pr/classes/{OLS4_OBO_CLASS}{}",
            curie.replace(':', "_")
        ),
        "GTOPDB"           => format!("https://www.guidetopharmacology.org/GRAC/LigandDisplayForward?ligandId={id}"),
        _ => return None,
    };
    Some(url)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
