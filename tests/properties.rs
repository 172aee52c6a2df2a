mod support;

use once_cell::sync::Lazy;
use part_picker::catalog::CatalogIndex;
use part_picker::compat::{CompatibilityEngine, CompatibilityStatus};
use part_picker::{BuildSelection, BuildSession, CatalogLookup, InMemoryKeyValueStore, Slot};
use proptest::prelude::*;
use proptest::sample::select;

static CATALOG: Lazy<CatalogIndex> = Lazy::new(support::catalog::fixture);

const CPUS: &[&str] = &["CPU-INTEL", "CPU-AMD", "UNKNOWN"];
const MOTHERBOARDS: &[&str] = &["MB-AM4-ATX", "MB-1700-MATX", "GPU-LONG"];
const GPUS: &[&str] = &["GPU-LONG", "GPU-SHORT"];
const CASES: &[&str] = &["CASE-320", "CASE-ITX"];
const COOLERS: &[&str] = &["COOLER-AIO", "COOLER-AIR", "UNKNOWN"];
const PSUS: &[&str] = &["PSU-300", "PSU-350", "PSU-450"];
const STORAGE: &[&str] = &["SSD-1TB", "UNKNOWN"];

fn slot(ids: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(select(ids).prop_map(String::from))
}

fn selection_strategy() -> impl Strategy<Value = BuildSelection> {
    (
        slot(CPUS),
        slot(MOTHERBOARDS),
        slot(GPUS),
        slot(CASES),
        slot(COOLERS),
        slot(PSUS),
        proptest::collection::vec(select(STORAGE).prop_map(String::from), 0..4),
    )
        .prop_map(|(cpu, motherboard, gpu, case, cooler, psu, storage)| BuildSelection {
            cpu,
            motherboard,
            gpu,
            case,
            cooler,
            psu,
            storage,
        })
}

fn price_of(id: &str) -> u64 {
    CATALOG.component(id).map_or(0, |component| component.price())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn evaluation_is_idempotent(selection in selection_strategy()) {
        let engine = CompatibilityEngine::new(&*CATALOG);
        prop_assert_eq!(engine.evaluate(&selection), engine.evaluate(&selection));
    }

    #[test]
    fn issues_only_name_selected_slots(selection in selection_strategy()) {
        let engine = CompatibilityEngine::new(&*CATALOG);
        for issue in engine.evaluate(&selection).issues {
            for slot in &issue.components {
                prop_assert!(selection.is_filled(*slot), "{} names empty slot {}", issue, slot);
            }
        }
    }

    #[test]
    fn price_is_sum_of_resolved_parts(selection in selection_strategy()) {
        let engine = CompatibilityEngine::new(&*CATALOG);
        let expected: u64 = selection
            .entries()
            .into_iter()
            .filter(|(slot, id)| CATALOG.component(id).is_some_and(|c| c.category() == slot.category()))
            .map(|(_, id)| price_of(id))
            .sum();
        prop_assert_eq!(engine.total_price(&selection), expected);
    }

    #[test]
    fn removing_a_slot_subtracts_its_price(selection in selection_strategy(), index in 0usize..6) {
        let engine = CompatibilityEngine::new(&*CATALOG);
        let slot = Slot::ORDER[index];
        let removed = selection
            .get(slot)
            .filter(|id| CATALOG.component(id).is_some_and(|c| c.category() == slot.category()))
            .map_or(0, price_of);

        let mut smaller = selection.clone();
        smaller.remove(slot);
        prop_assert_eq!(engine.total_price(&smaller) + removed, engine.total_price(&selection));
    }

    #[test]
    fn power_counts_every_resolved_storage_device(selection in selection_strategy()) {
        let engine = CompatibilityEngine::new(&*CATALOG);
        let cpu = selection.cpu.as_deref().and_then(|id| CATALOG.cpu(id)).map_or(0, |c| c.tdp);
        let gpu = selection.gpu.as_deref().and_then(|id| CATALOG.gpu(id)).map_or(0, |g| g.tdp);
        let resolved = selection.storage.iter().filter(|id| CATALOG.storage(id.as_str()).is_some());
        let storage = 7 * resolved.count() as u32;
        prop_assert_eq!(engine.total_power(&selection), cpu + gpu + 50 + storage);
    }

    #[test]
    fn status_matches_blocking(selection in selection_strategy()) {
        let evaluation = CompatibilityEngine::new(&*CATALOG).evaluate(&selection);
        prop_assert_eq!(
            evaluation.has_blocking_issues(),
            evaluation.status() == CompatibilityStatus::Error
        );
    }

    #[test]
    fn save_load_round_trip(selection in selection_strategy()) {
        let mut session = BuildSession::new(&*CATALOG, InMemoryKeyValueStore::new());
        for (slot, id) in selection.entries() {
            session.select(slot, id);
        }
        let at_save = session.evaluation().clone();
        let id = session.save("prop").id.clone();

        for slot in Slot::ORDER {
            session.remove(slot);
        }
        prop_assert!(session.load(&id));
        prop_assert_eq!(session.selection(), &selection);
        prop_assert_eq!(session.evaluation(), &at_save);
    }
}
