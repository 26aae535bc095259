//! End-to-end harmonization through both mapping sources.

use std::collections::HashSet;
use std::io::Write;

use rsid_harmonizer::parsing::ensembl::parse_ensembl_json;
use rsid_harmonizer::parsing::rsid::clean_rsids;
use rsid_harmonizer::parsing::var2location::{parse_var2location_file, parse_var2location_text};
use rsid_harmonizer::{ChromosomeSet, Harmonization, OtherAllele, StrandVerdict, VariantCatalog};

const VAR2LOCATION: &str = "\
rs429358\trs429358\tT/C\t19\t44908684\t44908684
rs7412\trs7412\tC/T\t19\t44908822\t44908822
rs1800562\trs1800562\tG/A\t6\t26092913\t26092913
rs1800562\trs1800562\tG/A\tCHR_HSCHR6_MHC_COX_CTG1\t26100000\t26100000
rs71785313\trs71785313\t-/GT\t1\t1000\t1001
rs11111\trs22222\tA/T\t2\t5000\t5000
rs33333\trs33333\tC/G\t3\t100\t100
rs33333\trs33333\tC/G\t3\t900\t900
";

const ENSEMBL: &str = r#"{
    "rs7412": {
        "name": "rs7412",
        "synonyms": ["rs17848735"],
        "mappings": [
            {"seq_region_name": "19", "start": 44908822, "end": 44908822, "allele_string": "C/T"}
        ]
    }
}"#;

fn resolved_catalog(text: &str) -> VariantCatalog {
    let mut catalog = parse_var2location_text(text, None).unwrap();
    catalog.resolve_all(&ChromosomeSet::human_default());
    catalog
}

#[test]
fn test_scoring_file_flow() {
    let raw = ["rs429358_x_rs7412", "rs1800562", "rs71785313;rs11111", "1:1000:A:G"];
    let ids = clean_rsids(raw);
    assert_eq!(ids.len(), 5);

    let mut catalog = parse_var2location_text(VAR2LOCATION, Some(&ids)).unwrap();
    let summary = catalog.resolve_all(&ChromosomeSet::human_default());
    assert_eq!(summary.resolved, 5);
    assert!(catalog.get("rs33333").is_none());

    // Patch-region mapping is ignored
    let hfe = catalog.get("rs1800562").unwrap().resolved().unwrap();
    assert_eq!((hfe.chromosome.as_str(), hfe.position), ("6", 26_092_913));
}

#[test]
fn test_verdicts() {
    let catalog = resolved_catalog(VAR2LOCATION);

    let apoe = catalog.get("rs429358").unwrap();
    assert_eq!(
        apoe.check_alleles("C", Some("T")),
        Some(StrandVerdict {
            matches: true,
            is_palindromic: false,
            is_flipped: false
        })
    );
    assert_eq!(
        apoe.check_alleles("G", Some("A")),
        Some(StrandVerdict {
            matches: true,
            is_palindromic: false,
            is_flipped: true
        })
    );

    // A/T is palindromic whatever is declared
    let merged = catalog.get("rs11111").unwrap();
    let verdict = merged.check_alleles("C", None).unwrap();
    assert!(verdict.is_palindromic);
    assert!(!verdict.matches);

    // Ambiguous positions cannot be evaluated
    assert!(catalog.get("rs33333").unwrap().check_alleles("C", None).is_none());
}

#[test]
fn test_other_allele_inference() {
    let catalog = resolved_catalog(VAR2LOCATION);
    let indel = catalog.get("rs71785313").unwrap();
    assert_eq!(indel.infer_other_allele("GT"), OtherAllele::Known("-".to_string()));
    assert_eq!(indel.infer_other_allele("-"), OtherAllele::Known("GT".to_string()));
    assert_eq!(indel.infer_other_allele("AC"), OtherAllele::Unknown);
}

#[test]
fn test_synonyms_resolve_identically_across_sources() {
    let v2l = resolved_catalog(VAR2LOCATION);
    let by_query = v2l.get("rs11111").unwrap();
    let by_canonical = v2l.get("rs22222").unwrap();
    assert_eq!(by_query.resolved(), by_canonical.resolved());

    let mut ensembl = parse_ensembl_json(ENSEMBL).unwrap();
    ensembl.resolve_all(&ChromosomeSet::human_default());
    let primary = ensembl.get("rs7412").unwrap();
    let synonym = ensembl.get("rs17848735").unwrap();
    assert_eq!(primary.resolved(), synonym.resolved());

    // Both sources agree on the shared variant
    assert_eq!(
        primary.resolved(),
        v2l.get("rs7412").unwrap().resolved()
    );
}

#[test]
fn test_harmonization_records() {
    let catalog = resolved_catalog(VAR2LOCATION);

    let declared = Harmonization::evaluate("rs7412", "T", Some("C".to_string()), catalog.get("rs7412"));
    assert!(declared.verdict.unwrap().matches);
    assert!(declared.inferred_other_allele.is_none());

    let inferred = Harmonization::evaluate("rs7412", "T", None, catalog.get("rs7412"));
    assert_eq!(inferred.inferred_other_allele, Some(OtherAllele::Known("C".to_string())));

    let missing = Harmonization::evaluate("rs404", "T", None, catalog.get("rs404"));
    assert!(missing.locus.is_none());
    assert_eq!(missing.inferred_other_allele, Some(OtherAllele::Unknown));
}

#[test]
fn test_restricted_chromosome_set() {
    let mut catalog = parse_var2location_text(VAR2LOCATION, None).unwrap();
    let accepted: ChromosomeSet = "19".parse().unwrap();
    let summary = catalog.resolve_all(&accepted);
    assert_eq!(summary.resolved, 2);
    assert!(!catalog.get("rs1800562").unwrap().is_resolved());
}

#[test]
fn test_gzipped_var2location_file() {
    let mut file = tempfile::Builder::new().suffix(".tsv.gz").tempfile().unwrap();
    {
        let mut encoder =
            flate2::write::GzEncoder::new(file.as_file_mut(), flate2::Compression::default());
        encoder.write_all(VAR2LOCATION.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }

    let allowed: HashSet<String> = ["rs7412".to_string()].into_iter().collect();
    let catalog = parse_var2location_file(file.path(), Some(&allowed)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("rs7412").is_some());
}
