//! Small hand-written catalog with the part pairings the scenario tests need.

use part_picker::catalog::{CatalogIndex, CatalogSource, Document};
use serde_json::{json, Value};

fn product(id: &str, name: &str, category: &str, price: u64) -> Value {
    json!({
        "prodID": id,
        "prodName": name,
        "price": price,
        "categoryID": category,
        "smimageurl": format!("/images/{}.jpg", id),
        "bigimageurl": [],
        "timestamps": "2024-01-01T00:00:00Z",
        "averageRating": 4.0,
        "totalratingsRecieved": 1
    })
}

fn cpu(id: &str, socket: &str, tdp: u32) -> Value {
    json!({
        "prodID": id, "socketType": socket, "cores": 8, "threads": 16,
        "baseClock": 3.5, "boostClock": 5.0, "tdp": tdp, "hasIGPU": false,
        "cache": "32MB", "generation": "test"
    })
}

fn motherboard(id: &str, socket: &str, form_factor: &str) -> Value {
    json!({
        "prodID": id, "socketType": socket, "formFactor": form_factor, "ramType": "DDR5",
        "ramSlots": 4, "maxRamGb": 128, "maxRamSpeedMhz": 6000, "pcieSlots": 2,
        "m2Slots": 2, "sataPorts": 4, "hasWifi": true, "hasBluetooth": true
    })
}

fn gpu(id: &str, length_mm: u32, tdp: u32) -> Value {
    json!({
        "prodID": id, "chipset": "test", "vramGb": 12, "tdp": tdp, "pcieVersion": "PCIe 4.0",
        "length_mm": length_mm, "powerConnector": "1x 8-pin", "hasRayTracing": true,
        "coolingType": "Triple Fan"
    })
}

fn case(id: &str, form_factors: &str, max_gpu_mm: u32) -> Value {
    json!({
        "prodID": id, "formFactor": form_factors, "maxGpuLengthmm": max_gpu_mm,
        "maxCoolerHeightMm": 160, "supportedPsuTypes": "ATX", "driveBays25": 2,
        "driveBays35": 1, "hasRGB": false, "hasGlassPanel": true
    })
}

fn cooler(id: &str, kind: &str, sockets: &str, max_tdp: u32, radiator_mm: u32) -> Value {
    json!({
        "prodID": id, "coolerType": kind, "SupportedSocket": sockets, "fanSizeMm": 120,
        "radiatorSizeMm": radiator_mm, "maxTdpSupported": max_tdp, "hasRGB": false,
        "noiseLevelDB": 28.0
    })
}

fn psu(id: &str, wattage: u32) -> Value {
    json!({
        "prodID": id, "wattage": wattage, "efficiencyRating": "80+ Gold",
        "modularity": "Fully Modular", "formFactor": "ATX", "pciConnectors": 2
    })
}

fn storage(id: &str) -> Value {
    json!({
        "prodID": id, "storageType": "NVMe SSD", "capacityGB": 1000,
        "interface": "PCIe 4.0 x4", "formFactor": "M.2 2280", "readSpeed": 7000
    })
}

/// Raw documents, so tests can break them before indexing.
pub fn documents() -> Vec<(Document, Value)> {
    vec![
        (
            Document::Products,
            json!([
                product("CPU-INTEL", "Intel 65W", "CAT001", 20000),
                product("CPU-AMD", "AMD 105W", "CAT001", 30000),
                product("GPU-LONG", "GPU 330mm", "CAT002", 50000),
                product("GPU-SHORT", "GPU 300mm", "CAT002", 40000),
                product("MB-AM4-ATX", "AM4 ATX board", "CAT003", 15000),
                product("MB-1700-MATX", "LGA1700 mATX board", "CAT003", 12000),
                product("PSU-300", "300W", "CAT004", 4000),
                product("PSU-350", "350W", "CAT004", 4500),
                product("PSU-450", "450W", "CAT004", 5500),
                product("CASE-320", "Mid tower", "CAT005", 9000),
                product("CASE-ITX", "ITX box", "CAT005", 8000),
                product("COOLER-AIO", "360 AIO", "CAT006", 13000),
                product("COOLER-AIR", "AM4 tower", "CAT006", 3000),
                product("SSD-1TB", "1TB NVMe", "CAT007", 7000)
            ]),
        ),
        (
            Document::Cpus,
            json!([cpu("CPU-INTEL", "LGA1700", 65), cpu("CPU-AMD", "AM4", 105)]),
        ),
        (
            Document::Gpus,
            json!([gpu("GPU-LONG", 330, 200), gpu("GPU-SHORT", 300, 200)]),
        ),
        (
            Document::Motherboards,
            json!([
                motherboard("MB-AM4-ATX", "AM4", "ATX"),
                motherboard("MB-1700-MATX", "LGA1700", "Micro-ATX")
            ]),
        ),
        (
            Document::Psus,
            json!([psu("PSU-300", 300), psu("PSU-350", 350), psu("PSU-450", 450)]),
        ),
        (
            Document::Cases,
            json!([
                case("CASE-320", "ATX, Micro-ATX", 320),
                case("CASE-ITX", "Mini-ITX", 320)
            ]),
        ),
        (
            Document::Coolers,
            json!([
                cooler("COOLER-AIO", "AIO", "LGA1700/AM4", 250, 360),
                cooler("COOLER-AIR", "Air", "AM4", 95, 0)
            ]),
        ),
        (Document::Storage, json!([storage("SSD-1TB")])),
        (Document::Ratings, json!([])),
    ]
}

pub fn index_of(documents: Vec<(Document, Value)>) -> CatalogIndex {
    let source = documents
        .into_iter()
        .try_fold(CatalogSource::new(), |source, (document, value)| {
            source.with_document(document, &value.to_string())
        })
        .unwrap();
    CatalogIndex::build(source)
}

pub fn fixture() -> CatalogIndex {
    index_of(documents())
}
