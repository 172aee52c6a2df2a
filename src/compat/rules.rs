//! Pairwise and system-wide compatibility rules.
//!
//! Every rule is a pure function of the specs it needs and returns at most one issue.
//! Callers only invoke a rule once all of its inputs are selected.

use crate::build::Slot;
use crate::catalog::{CaseSpec, CoolerSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec};
use crate::config::PowerPolicy;

use super::issue::{CompatibilityIssue, IssueKind};

pub fn cpu_motherboard_socket(
    cpu: &CpuSpec,
    motherboard: &MotherboardSpec,
) -> Option<CompatibilityIssue> {
    (cpu.socket_type != motherboard.socket_type).then(|| {
        CompatibilityIssue::error(
            IssueKind::Socket,
            format!(
                "CPU socket {} is incompatible with motherboard socket {}",
                cpu.socket_type, motherboard.socket_type
            ),
            &[Slot::Cpu, Slot::Motherboard],
        )
    })
}

pub fn gpu_case_clearance(gpu: &GpuSpec, case: &CaseSpec) -> Option<CompatibilityIssue> {
    (gpu.length_mm > case.max_gpu_length_mm).then(|| {
        CompatibilityIssue::error(
            IssueKind::Clearance,
            format!(
                "GPU length ({}mm) exceeds case maximum clearance ({}mm)",
                gpu.length_mm, case.max_gpu_length_mm
            ),
            &[Slot::Gpu, Slot::Case],
        )
    })
}

pub fn cooler_cpu_socket(cooler: &CoolerSpec, cpu: &CpuSpec) -> Option<CompatibilityIssue> {
    (!cooler.supports_socket(&cpu.socket_type)).then(|| {
        CompatibilityIssue::error(
            IssueKind::Socket,
            format!(
                "CPU cooler does not support {} socket (supports: {})",
                cpu.socket_type, cooler.supported_sockets
            ),
            &[Slot::Cooler, Slot::Cpu],
        )
    })
}

pub fn cooler_cpu_thermal(cooler: &CoolerSpec, cpu: &CpuSpec) -> Option<CompatibilityIssue> {
    (cooler.max_tdp_supported < cpu.tdp).then(|| {
        CompatibilityIssue::warning(
            IssueKind::Power,
            format!(
                "Cooler TDP support ({}W) is insufficient for CPU TDP ({}W)",
                cooler.max_tdp_supported, cpu.tdp
            ),
            &[Slot::Cooler, Slot::Cpu],
        )
    })
}

pub fn motherboard_case_form_factor(
    motherboard: &MotherboardSpec,
    case: &CaseSpec,
) -> Option<CompatibilityIssue> {
    (!case.supports_form_factor(&motherboard.form_factor)).then(|| {
        CompatibilityIssue::error(
            IssueKind::FormFactor,
            format!(
                "Case does not support {} motherboard form factor",
                motherboard.form_factor
            ),
            &[Slot::Motherboard, Slot::Case],
        )
    })
}

/// Heuristic: large AIO radiators are flagged whatever the case claims to support.
pub fn cooler_case_radiator(
    cooler: &CoolerSpec,
    _case: &CaseSpec,
    limit_mm: u32,
) -> Option<CompatibilityIssue> {
    (cooler.is_liquid() && cooler.radiator_size_mm > limit_mm).then(|| {
        CompatibilityIssue::warning(
            IssueKind::Clearance,
            format!(
                "Large {}mm radiator may not fit in the selected case",
                cooler.radiator_size_mm
            ),
            &[Slot::Cooler, Slot::Case],
        )
    })
}

/// Error below the estimated draw, warning below `ceil(draw * headroom)`.
pub fn psu_wattage(
    psu: &PsuSpec,
    total_power: u32,
    policy: &PowerPolicy,
) -> Option<CompatibilityIssue> {
    let recommended = policy.recommended_wattage(total_power);
    if psu.wattage < total_power {
        return Some(CompatibilityIssue::error(
            IssueKind::Power,
            format!(
                "PSU wattage ({}W) is insufficient for system power consumption ({}W)",
                psu.wattage, total_power
            ),
            &[Slot::Psu],
        ));
    }
    if psu.wattage < recommended {
        return Some(CompatibilityIssue::warning(
            IssueKind::Power,
            format!(
                "PSU wattage ({}W) is below recommended ({}W) for optimal system stability",
                psu.wattage, recommended
            ),
            &[Slot::Psu],
        ));
    }
    None
}
