mod oneshot_tests;

use glosa_core::{CsvParser, GlossaryStore};

pub(crate) const SHEET: &str = "Term,Term (EN),Term (ID),Definition (EN),Definition (ID),Category
API,Application Programming Interface,Antarmuka Pemrograman Aplikasi,\"The API is a contract, between programs\",Kontrak antar program,\"Software, Web\"
Firewall,Firewall,Tembok Api,Blocks unwanted traffic,Memblokir lalu lintas,Security
Rapid API,,,Hosted APIs,,Web
";

pub(crate) fn sample_store() -> GlossaryStore {
    GlossaryStore::load(SHEET, &CsvParser::default())
}
