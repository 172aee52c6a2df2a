use serde::Serialize;

use crate::build::{BuildSelection, Slot};
use crate::catalog::{
    CaseSpec, CatalogLookup, ComponentSpec, CoolerSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec,
    StorageSpec,
};
use crate::config::EngineConfig;

use super::issue::{CompatibilityIssue, CompatibilityStatus};
use super::rules;

/// Everything the builder shows for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(rename = "errors")]
    pub issues: Vec<CompatibilityIssue>,
    pub total_price: u64,
    pub total_power: u32,
}

impl Evaluation {
    pub fn status(&self) -> CompatibilityStatus {
        CompatibilityStatus::from_issues(&self.issues)
    }

    pub fn has_blocking_issues(&self) -> bool {
        self.issues.iter().any(CompatibilityIssue::is_blocking)
    }

    pub fn issues_for(&self, slot: Slot) -> impl Iterator<Item = &CompatibilityIssue> {
        self.issues.iter().filter(move |issue| issue.implicates(slot))
    }

    /// Whether an error-severity issue involves `slot`.
    pub fn blocks(&self, slot: Slot) -> bool {
        self.issues_for(slot).any(CompatibilityIssue::is_blocking)
    }
}

/// The selection's ids resolved against the catalog. Unknown ids are dropped.
struct Resolved<'a> {
    cpu: Option<&'a CpuSpec>,
    motherboard: Option<&'a MotherboardSpec>,
    gpu: Option<&'a GpuSpec>,
    case: Option<&'a CaseSpec>,
    cooler: Option<&'a CoolerSpec>,
    psu: Option<&'a PsuSpec>,
    storage: Vec<&'a StorageSpec>,
}

impl Resolved<'_> {
    fn price(&self) -> u64 {
        [
            self.cpu.map(|s| s.price()),
            self.motherboard.map(|s| s.price()),
            self.gpu.map(|s| s.price()),
            self.case.map(|s| s.price()),
            self.cooler.map(|s| s.price()),
            self.psu.map(|s| s.price()),
        ]
        .into_iter()
        .flatten()
        .chain(self.storage.iter().map(|s| s.price()))
        .sum()
    }
}

/// Runs the rule set over a selection. Holds no state between calls.
pub struct CompatibilityEngine<'c, C: ?Sized> {
    catalog: &'c C,
    config: EngineConfig,
}

impl<'c, C: CatalogLookup + ?Sized> CompatibilityEngine<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: &'c C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c C {
        self.catalog
    }

    pub fn evaluate(&self, selection: &BuildSelection) -> Evaluation {
        let resolved = self.resolve(selection);
        let total_power = self.power_of(&resolved);
        let issues = self.run_rules(&resolved, total_power);
        let evaluation = Evaluation {
            issues,
            total_price: resolved.price(),
            total_power,
        };

        tracing::debug!(
            target: "compat",
            issues = evaluation.issues.len(),
            total_price = evaluation.total_price,
            total_power = evaluation.total_power,
            "build evaluated"
        );
        evaluation
    }

    pub fn total_price(&self, selection: &BuildSelection) -> u64 {
        self.resolve(selection).price()
    }

    /// CPU TDP + GPU TDP + base allowance + per-device storage allowance.
    pub fn total_power(&self, selection: &BuildSelection) -> u32 {
        let resolved = self.resolve(selection);
        self.power_of(&resolved)
    }

    /// Only resolved storage devices draw power. Saturates at `u32::MAX`.
    fn power_of(&self, resolved: &Resolved<'_>) -> u32 {
        let policy = &self.config.power;
        let storage_devices = u32::try_from(resolved.storage.len()).unwrap_or(u32::MAX);
        resolved
            .cpu
            .map_or(0, |cpu| cpu.tdp)
            .saturating_add(resolved.gpu.map_or(0, |gpu| gpu.tdp))
            .saturating_add(policy.base_allowance_w)
            .saturating_add(policy.storage_allowance_w.saturating_mul(storage_devices))
    }

    fn run_rules(&self, r: &Resolved<'_>, total_power: u32) -> Vec<CompatibilityIssue> {
        let mut issues = Vec::new();

        if let (Some(cpu), Some(motherboard)) = (r.cpu, r.motherboard) {
            issues.extend(rules::cpu_motherboard_socket(cpu, motherboard));
        }
        if let (Some(gpu), Some(case)) = (r.gpu, r.case) {
            issues.extend(rules::gpu_case_clearance(gpu, case));
        }
        if let (Some(cooler), Some(cpu)) = (r.cooler, r.cpu) {
            issues.extend(rules::cooler_cpu_socket(cooler, cpu));
            issues.extend(rules::cooler_cpu_thermal(cooler, cpu));
        }
        if let (Some(motherboard), Some(case)) = (r.motherboard, r.case) {
            issues.extend(rules::motherboard_case_form_factor(motherboard, case));
        }
        if let (Some(cooler), Some(case)) = (r.cooler, r.case) {
            issues.extend(rules::cooler_case_radiator(
                cooler,
                case,
                self.config.radiator_warning_mm,
            ));
        }
        if let Some(psu) = r.psu {
            issues.extend(rules::psu_wattage(psu, total_power, &self.config.power));
        }

        issues
    }

    fn resolve(&self, selection: &BuildSelection) -> Resolved<'c> {
        Resolved {
            cpu: self.lookup(Slot::Cpu, selection.cpu.as_deref(), |c, id| c.cpu(id)),
            motherboard: self.lookup(Slot::Motherboard, selection.motherboard.as_deref(), |c, id| {
                c.motherboard(id)
            }),
            gpu: self.lookup(Slot::Gpu, selection.gpu.as_deref(), |c, id| c.gpu(id)),
            case: self.lookup(Slot::Case, selection.case.as_deref(), |c, id| c.case(id)),
            cooler: self.lookup(Slot::Cooler, selection.cooler.as_deref(), |c, id| c.cooler(id)),
            psu: self.lookup(Slot::Psu, selection.psu.as_deref(), |c, id| c.psu(id)),
            storage: selection
                .storage
                .iter()
                .filter_map(|id| {
                    self.lookup(Slot::Storage, Some(id.as_str()), |c, id| c.storage(id))
                })
                .collect(),
        }
    }

    fn lookup<T: ?Sized>(
        &self,
        slot: Slot,
        id: Option<&str>,
        get: impl FnOnce(&'c C, &str) -> Option<&'c T>,
    ) -> Option<&'c T> {
        let id = id?;
        let found = get(self.catalog, id);
        if found.is_none() {
            tracing::debug!(target: "compat", %slot, id, "selected id not in catalog, ignoring");
        }
        found
    }

    /// How to narrow the product list for `slot` given what is already picked.
    /// `None` when nothing selected constrains that slot.
    pub fn candidate_filter(&self, slot: Slot, selection: &BuildSelection) -> Option<CandidateFilter> {
        let resolved = self.resolve(selection);
        let (constraint, message) = match slot {
            Slot::Motherboard => {
                let cpu = resolved.cpu?;
                (
                    Constraint::Socket(cpu.socket_type.clone()),
                    format!(
                        "Showing motherboards compatible with {} ({} socket)",
                        cpu.name(),
                        cpu.socket_type
                    ),
                )
            }
            Slot::Cpu => {
                let motherboard = resolved.motherboard?;
                (
                    Constraint::Socket(motherboard.socket_type.clone()),
                    format!(
                        "Showing CPUs compatible with {} ({} socket)",
                        motherboard.name(),
                        motherboard.socket_type
                    ),
                )
            }
            Slot::Case => {
                let motherboard = resolved.motherboard?;
                (
                    Constraint::FormFactor(motherboard.form_factor.clone()),
                    format!(
                        "Showing cases compatible with {} motherboards",
                        motherboard.form_factor
                    ),
                )
            }
            Slot::Gpu => {
                let case = resolved.case?;
                (
                    Constraint::MaxGpuLength(case.max_gpu_length_mm),
                    format!(
                        "Showing GPUs up to {}mm that fit in {}",
                        case.max_gpu_length_mm,
                        case.name()
                    ),
                )
            }
            Slot::Cooler => {
                let cpu = resolved.cpu?;
                (
                    Constraint::Cooler {
                        socket: cpu.socket_type.clone(),
                        tdp: cpu.tdp,
                    },
                    format!(
                        "Showing coolers compatible with {} ({} socket)",
                        cpu.name(),
                        cpu.socket_type
                    ),
                )
            }
            Slot::Psu => {
                let total = self.power_of(&resolved);
                let recommended = self.config.power.recommended_wattage(total);
                (
                    Constraint::MinWattage(recommended),
                    format!(
                        "Showing PSUs with sufficient wattage ({}W+ recommended)",
                        recommended
                    ),
                )
            }
            Slot::Storage => return None,
        };

        Some(CandidateFilter {
            slot,
            constraint,
            message,
        })
    }

    /// The catalog's components for `slot` that pass [`candidate_filter`](Self::candidate_filter).
    pub fn compatible_candidates(&self, slot: Slot, selection: &BuildSelection) -> Vec<ComponentSpec> {
        let filter = self.candidate_filter(slot, selection);
        self.catalog
            .components_in(slot.category())
            .into_iter()
            .filter(|component| filter.as_ref().map_or(true, |f| f.accepts(component)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// CPU or motherboard socket must equal this token.
    Socket(String),
    /// Case must list this motherboard form factor.
    FormFactor(String),
    MaxGpuLength(u32),
    /// Cooler must list the socket and handle the TDP.
    Cooler { socket: String, tdp: u32 },
    MinWattage(u32),
}

/// A narrowing of one slot's product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    pub slot: Slot,
    pub constraint: Constraint,
    pub message: String,
}

impl CandidateFilter {
    /// Components of another category never pass.
    pub fn accepts(&self, component: &ComponentSpec) -> bool {
        match (&self.constraint, component) {
            (Constraint::Socket(socket), ComponentSpec::Cpu(cpu)) => {
                self.slot == Slot::Cpu && &cpu.socket_type == socket
            }
            (Constraint::Socket(socket), ComponentSpec::Motherboard(motherboard)) => {
                self.slot == Slot::Motherboard && &motherboard.socket_type == socket
            }
            (Constraint::FormFactor(form_factor), ComponentSpec::Case(case)) => {
                case.supports_form_factor(form_factor)
            }
            (Constraint::MaxGpuLength(max), ComponentSpec::Gpu(gpu)) => gpu.length_mm <= *max,
            (Constraint::Cooler { socket, tdp }, ComponentSpec::Cooler(cooler)) => {
                cooler.supports_socket(socket)
                    && cooler.max_tdp_supported >= *tdp
            }
            (Constraint::MinWattage(min), ComponentSpec::Psu(psu)) => psu.wattage >= *min,
            _ => false,
        }
    }
}
