use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use papers::{decide_files, load_countries, load_watchlist, Decision, LoadError, PapersError};

const COUNTRIES: &str = r#"{
    "ALB": {"code": "ALB", "name": "Duchy of Alberta", "visitor_visa_required": "0",
            "transit_visa_required": "0", "medical_advisory": ""},
    "BRD": {"code": "BRD", "name": "Big Red Dot", "visitor_visa_required": "1",
            "transit_visa_required": "1", "medical_advisory": ""},
    "CFR": {"code": "CFR", "name": "Confederation of Frozen Republics", "visitor_visa_required": "0",
            "transit_visa_required": "0", "medical_advisory": "EBOLA"},
    "KAN": {"code": "KAN", "name": "Kanadia", "visitor_visa_required": "0",
            "transit_visa_required": "0", "medical_advisory": ""}
}"#;

const WATCHLIST: &str = r#"[
    {"last_name": "BOOKER", "first_name": "MICHAEL", "passport": "QL5K0-K9LDP-ND6S6-MLNDD-6N93T"},
    {"last_name": "SHIELDS", "first_name": "ILONA", "passport": "GDVMW-2ULZ9-TBVJD-4Y1QJ-PCBUR"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("countries.json"), COUNTRIES).unwrap();
        fs::write(dir.path().join("watchlist.json"), WATCHLIST).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn input(&self, name: &str, json: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, json).unwrap();
        path
    }

    fn decide(&self, input: &Path) -> Vec<Decision> {
        decide_files(input, self.path("watchlist.json"), self.path("countries.json")).unwrap()
    }
}

#[test]
fn returning_citizens() {
    let fx = Fixture::new();
    let input = fx.input(
        "test_returning_citizen.json",
        r#"[
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "ELIZABETH", "last_name": "WOODS",
             "birth_date": "1974-02-13", "home": {"city": "Whitehorse", "region": "Yukon", "country": "KAN"},
             "entry_reason": "returning", "from": {"city": "Ariskalan", "region": "North", "country": "ALB"}},
            {"passport": "XYDTK-7YPFI-6YZZH-PBHXW-4FYH5", "first_name": "AIDEN", "last_name": "STALLINGS",
             "birth_date": "1989-10-29", "home": {"city": "Ottawa", "region": "Ontario", "country": "KAN"},
             "entry_reason": "returning", "from": {"city": "Bala", "region": "North", "country": "BRD"}}
        ]"#,
    );
    assert_eq!(fx.decide(&input), vec![Decision::Accept, Decision::Accept]);
}

#[test]
fn quarantine_from_and_via() {
    let fx = Fixture::new();
    let input = fx.input(
        "test_quarantine.json",
        r#"[
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "CFR"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D3", "first_name": "C", "last_name": "D",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"},
             "via": {"country": "CFR"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D4", "first_name": "E", "last_name": "F",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"},
             "via": {"country": "KAN"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D5", "first_name": "G", "last_name": "H",
             "home": {"country": "ALB"}, "entry_reason": "visit", "from": {"country": "ALB"}}
        ]"#,
    );
    assert_eq!(
        fx.decide(&input),
        vec![Decision::Quarantine, Decision::Quarantine, Decision::Accept, Decision::Accept]
    );
}

#[test]
fn watchlist_by_passport_and_by_name() {
    let fx = Fixture::new();
    let input = fx.input(
        "test_watchlist.json",
        r#"[
            {"passport": "ql5k0-k9ldp-nd6s6-mlndd-6n93t", "first_name": "JOHN", "last_name": "DOE",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}},
            {"passport": "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE", "first_name": "Ilona", "last_name": "Shields",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}}
        ]"#,
    );
    assert_eq!(fx.decide(&input), vec![Decision::Secondary, Decision::Secondary]);
}

#[test]
fn completeness_and_passport_format() {
    let fx = Fixture::new();
    let input = fx.input(
        "test_completeness.json",
        r#"[
            {"passport": "", "first_name": "A", "last_name": "B",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "", "last_name": "B",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}},
            {"passport": "6P294-42HR2-95PSF-93NFF", "first_name": "A", "last_name": "B",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"city": "", "country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "KAN"}, "entry_reason": "returning", "from": {"country": "ALB"}}
        ]"#,
    );
    assert_eq!(
        fx.decide(&input),
        vec![
            Decision::Reject,
            Decision::Reject,
            Decision::Reject,
            Decision::Reject,
            Decision::Accept
        ]
    );
}

#[test]
fn visa_requirements() {
    let fx = Fixture::new();
    let input = fx.input(
        "test_have_visa.json",
        r#"[
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "BRD"}, "entry_reason": "visit", "from": {"country": "BRD"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "ALB"}, "entry_reason": "visit", "from": {"country": "ALB"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "BRD"}, "entry_reason": "transit", "from": {"country": "BRD"},
             "visa": {"code": "CFR6X-XSMVA", "date": "2001-01-01"}},
            {"passport": "6P294-42HR2-95PSF-93NFF-2T1D2", "first_name": "A", "last_name": "B",
             "home": {"country": "BRD"}, "entry_reason": "transit", "from": {"country": "BRD"},
             "visa": {"code": "CFR6X", "date": "2001/01/01"}}
        ]"#,
    );
    assert_eq!(
        fx.decide(&input),
        vec![Decision::Reject, Decision::Accept, Decision::Reject, Decision::Reject]
    );
}

#[test]
fn missing_watchlist_file_is_file_not_found() {
    let fx = Fixture::new();
    let input = fx.input("test_returning_citizen.json", "[]");
    let err = decide_files(&input, "", fx.path("countries.json")).unwrap_err();
    assert!(err.is_file_not_found());
    assert!(matches!(err, PapersError::Load(LoadError::FileNotFound { .. })));
}

#[test]
fn reference_files_load() {
    let fx = Fixture::new();
    let watchlist = load_watchlist(fx.path("watchlist.json")).unwrap();
    assert_eq!(watchlist.len(), 2);
    let countries = load_countries(fx.path("countries.json")).unwrap();
    assert_eq!(countries.len(), 4);
    assert!(countries.policy("BRD").unwrap().transit_visa_required);
    assert!(countries.policy("CFR").unwrap().has_advisory());
}
