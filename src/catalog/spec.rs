use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::tokens::split_tokens;
use super::{Category, Product};

/// A category-specific technical record, keyed by product id.
///
/// Implemented by the seven `*Details` records so the index can merge any of them
/// with their base [`Product`] generically.
pub trait SpecDetails: Sized {
    const CATEGORY: Category;

    fn product_id(&self) -> &str;

    fn into_component(spec: Spec<Self>) -> ComponentSpec;
}

/// A base product merged with its technical record.
///
/// Dereferences to the record, so `cpu.socket_type` and `cpu.product.price` both read
/// naturally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spec<D> {
    #[serde(flatten)]
    pub product: Product,
    #[serde(flatten)]
    pub details: D,
}

impl<D: SpecDetails> Spec<D> {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn price(&self) -> u64 {
        self.product.price
    }
}

impl<D> Deref for Spec<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.details
    }
}

pub type CpuSpec = Spec<CpuDetails>;
pub type GpuSpec = Spec<GpuDetails>;
pub type MotherboardSpec = Spec<MotherboardDetails>;
pub type PsuSpec = Spec<PsuDetails>;
pub type CaseSpec = Spec<CaseDetails>;
pub type CoolerSpec = Spec<CoolerDetails>;
pub type StorageSpec = Spec<StorageDetails>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub socket_type: String,
    pub cores: u32,
    pub threads: u32,
    pub base_clock: f32,
    pub boost_clock: f32,
    pub tdp: u32,
    #[serde(rename = "hasIGPU")]
    pub has_igpu: bool,
    pub cache: String,
    pub generation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub chipset: String,
    pub vram_gb: u32,
    pub tdp: u32,
    pub pcie_version: String,
    #[serde(rename = "length_mm")]
    pub length_mm: u32,
    pub power_connector: String,
    pub has_ray_tracing: bool,
    pub cooling_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotherboardDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub socket_type: String,
    pub form_factor: String,
    pub ram_type: String,
    pub ram_slots: u32,
    pub max_ram_gb: u32,
    pub max_ram_speed_mhz: u32,
    pub pcie_slots: u32,
    pub m2_slots: u32,
    pub sata_ports: u32,
    pub has_wifi: bool,
    pub has_bluetooth: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsuDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub wattage: u32,
    pub efficiency_rating: String,
    pub modularity: String,
    pub form_factor: String,
    pub pci_connectors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    /// Comma-delimited list of supported motherboard form factors.
    #[serde(rename = "formFactor")]
    pub supported_form_factors: String,
    #[serde(rename = "maxGpuLengthmm")]
    pub max_gpu_length_mm: u32,
    pub max_cooler_height_mm: u32,
    pub supported_psu_types: String,
    pub drive_bays_25: u32,
    pub drive_bays_35: u32,
    #[serde(rename = "hasRGB")]
    pub has_rgb: bool,
    pub has_glass_panel: bool,
}

impl CaseDetails {
    pub fn form_factors(&self) -> impl Iterator<Item = &str> {
        split_tokens(&self.supported_form_factors)
    }

    /// ASCII case-insensitive membership in [`form_factors`](Self::form_factors).
    pub fn supports_form_factor(&self, form_factor: &str) -> bool {
        let form_factor = form_factor.trim();
        self.form_factors()
            .any(|supported| supported.eq_ignore_ascii_case(form_factor))
    }
}

/// Cooling technology of a CPU cooler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CoolerType {
    Air,
    /// All-in-one liquid loop; the catalog spells it `AIO` or `Liquid`.
    Liquid,
    Other(String),
}

impl From<String> for CoolerType {
    fn from(raw: String) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "air" => CoolerType::Air,
            "aio" | "liquid" | "aio liquid" | "aio/liquid" => CoolerType::Liquid,
            _ => CoolerType::Other(raw),
        }
    }
}

impl From<CoolerType> for String {
    fn from(cooler_type: CoolerType) -> Self {
        match cooler_type {
            CoolerType::Air => "Air".to_string(),
            CoolerType::Liquid => "AIO".to_string(),
            CoolerType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for CoolerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolerType::Air => f.write_str("Air"),
            CoolerType::Liquid => f.write_str("AIO"),
            CoolerType::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoolerDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub cooler_type: CoolerType,
    /// Socket list delimited by `/` or `,`.
    #[serde(rename = "SupportedSocket")]
    pub supported_sockets: String,
    pub fan_size_mm: u32,
    #[serde(default)]
    pub radiator_size_mm: u32,
    pub max_tdp_supported: u32,
    #[serde(rename = "hasRGB")]
    pub has_rgb: bool,
    #[serde(rename = "noiseLevelDB")]
    pub noise_level_db: f32,
}

impl CoolerDetails {
    pub fn sockets(&self) -> impl Iterator<Item = &str> {
        split_tokens(&self.supported_sockets)
    }

    /// Exact membership in [`sockets`](Self::sockets), so `AM4` never matches `AM45`.
    pub fn supports_socket(&self, socket: &str) -> bool {
        let socket = socket.trim();
        self.sockets().any(|supported| supported == socket)
    }

    pub fn is_liquid(&self) -> bool {
        self.cooler_type == CoolerType::Liquid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDetails {
    #[serde(rename = "prodID", skip_serializing)]
    pub product_id: String,
    pub storage_type: String,
    #[serde(rename = "capacityGB")]
    pub capacity_gb: u32,
    pub interface: String,
    pub form_factor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tbw: Option<u32>,
}

macro_rules! spec_details {
    ($details:ty, $category:expr, $variant:ident) => {
        impl SpecDetails for $details {
            const CATEGORY: Category = $category;

            fn product_id(&self) -> &str {
                &self.product_id
            }

            fn into_component(spec: Spec<Self>) -> ComponentSpec {
                ComponentSpec::$variant(spec)
            }
        }
    };
}

spec_details!(CpuDetails, Category::Cpu, Cpu);
spec_details!(GpuDetails, Category::Gpu, Gpu);
spec_details!(MotherboardDetails, Category::Motherboard, Motherboard);
spec_details!(PsuDetails, Category::Psu, Psu);
spec_details!(CaseDetails, Category::Case, Case);
spec_details!(CoolerDetails, Category::Cooler, Cooler);
spec_details!(StorageDetails, Category::Storage, Storage);

/// Any catalog component together with its category-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentSpec {
    Cpu(CpuSpec),
    Gpu(GpuSpec),
    Motherboard(MotherboardSpec),
    Psu(PsuSpec),
    Case(CaseSpec),
    Cooler(CoolerSpec),
    Storage(StorageSpec),
}

impl ComponentSpec {
    pub fn product(&self) -> &Product {
        match self {
            ComponentSpec::Cpu(spec) => &spec.product,
            ComponentSpec::Gpu(spec) => &spec.product,
            ComponentSpec::Motherboard(spec) => &spec.product,
            ComponentSpec::Psu(spec) => &spec.product,
            ComponentSpec::Case(spec) => &spec.product,
            ComponentSpec::Cooler(spec) => &spec.product,
            ComponentSpec::Storage(spec) => &spec.product,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ComponentSpec::Cpu(_) => Category::Cpu,
            ComponentSpec::Gpu(_) => Category::Gpu,
            ComponentSpec::Motherboard(_) => Category::Motherboard,
            ComponentSpec::Psu(_) => Category::Psu,
            ComponentSpec::Case(_) => Category::Case,
            ComponentSpec::Cooler(_) => Category::Cooler,
            ComponentSpec::Storage(_) => Category::Storage,
        }
    }

    pub fn id(&self) -> &str {
        &self.product().id
    }

    pub fn price(&self) -> u64 {
        self.product().price
    }
}
