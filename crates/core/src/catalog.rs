use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, PlannerError};
use crate::models::{CatalogSummary, DestinationSummary, InterestCategory};

static BUILTIN: Lazy<ReferenceCatalog> = Lazy::new(builtin_catalog);

const NO_ACTIVITY_PLACEHOLDER: &str = "Trip interest not found for this location";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationEntry {
    pub name: String,
    pub hotels: Vec<String>,
    pub restaurants: Vec<String>,
    /// Interests missing from the map, or mapped to an empty list, have no curated activities.
    #[serde(default)]
    pub activities: BTreeMap<InterestCategory, Vec<String>>,
}

impl DestinationEntry {
    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        trim_all(&mut self.hotels);
        trim_all(&mut self.restaurants);
        for list in self.activities.values_mut() {
            trim_all(list);
            list.retain(|activity| {
                !activity.is_empty() && !activity.eq_ignore_ascii_case(NO_ACTIVITY_PLACEHOLDER)
            });
        }
    }

    pub fn activities_for(&self, interest: InterestCategory) -> &[String] {
        self.activities
            .get(&interest)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn summary(&self) -> DestinationSummary {
        DestinationSummary {
            name: self.name.clone(),
            hotels: self.hotels.len(),
            restaurants: self.restaurants.len(),
            interests: InterestCategory::ALL
                .into_iter()
                .filter(|interest| !self.activities_for(*interest).is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    destinations: Vec<DestinationEntry>,
}

impl ReferenceCatalog {
    pub fn builtin() -> &'static ReferenceCatalog {
        &BUILTIN
    }

    pub fn new(destinations: Vec<DestinationEntry>) -> Result<Self, CatalogError> {
        let mut catalog = Self { destinations };
        for entry in &mut catalog.destinations {
            entry.normalize();
        }
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: ReferenceCatalog = serde_json::from_str(raw)?;
        Self::new(catalog.destinations)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.destinations.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn resolve_destination(&self, name: &str) -> Result<&DestinationEntry, PlannerError> {
        let wanted = name.trim();
        self.destinations
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlannerError::UnknownDestination(name.to_string()))
    }

    pub fn hotels(&self, destination: &str) -> Option<&[String]> {
        self.resolve_destination(destination)
            .ok()
            .map(|entry| entry.hotels.as_slice())
    }

    pub fn restaurants(&self, destination: &str) -> Option<&[String]> {
        self.resolve_destination(destination)
            .ok()
            .map(|entry| entry.restaurants.as_slice())
    }

    pub fn activities(&self, destination: &str, interest: InterestCategory) -> Option<&[String]> {
        self.resolve_destination(destination)
            .ok()
            .map(|entry| entry.activities_for(interest))
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            destinations: self.destinations.iter().map(DestinationEntry::summary).collect(),
            interests: InterestCategory::ALL.to_vec(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.destinations.is_empty() {
            return Err(CatalogError::Invalid("no destinations defined".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.destinations {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(CatalogError::Invalid("destination with empty name".to_string()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(CatalogError::Invalid(format!(
                    "destination '{name}' is defined twice"
                )));
            }
            if !has_options(&entry.hotels) {
                return Err(CatalogError::Invalid(format!("{name} has no hotels")));
            }
            if !has_options(&entry.restaurants) {
                return Err(CatalogError::Invalid(format!("{name} has no restaurants")));
            }
        }

        Ok(())
    }
}

fn has_options(values: &[String]) -> bool {
    !values.is_empty() && values.iter().all(|value| !value.is_empty())
}

fn trim_all(values: &mut [String]) {
    for value in values.iter_mut() {
        *value = value.trim().to_string();
    }
}

fn entry(
    name: &str,
    hotels: &[&str],
    restaurants: &[&str],
    activities: [(InterestCategory, &[&str]); 4],
) -> DestinationEntry {
    DestinationEntry {
        name: name.to_string(),
        hotels: owned(hotels),
        restaurants: owned(restaurants),
        activities: activities
            .into_iter()
            .map(|(interest, list)| (interest, owned(list)))
            .collect(),
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn builtin_catalog() -> ReferenceCatalog {
    use InterestCategory::{Adventure, History, NatureAndWildlife, SightsAndLandmarks};

    ReferenceCatalog {
        destinations: vec![
            entry(
                "Addis Ababa",
                &[
                    "Sheraton Addis Hotel",
                    "Heyday Hotel",
                    "Radisson Hotel",
                    "Intercontinental Hotel",
                    "Capital Hotel And Spa",
                    "Hilton Hotel",
                    "Hyatt Hotel",
                    "Ethiopian Skylight",
                ],
                &[
                    "Verres en Vers",
                    "Sichuan Restaurant",
                    "La Mandoline",
                    "Villaverde Addis Ababa",
                    "2000 Habesha Cultural Restaurant",
                    "The Oriental",
                    "Gusto Restaurant",
                    "Opium Restaurant",
                    "Louvre Grand Hotel",
                    "Dok Restaurant",
                    "Dashen Traditional Ethiopian Restaurant",
                    "Effoi Pizza",
                    "The Kitchen",
                    "Castelli Restaurant",
                    "OM Indian Bistro",
                    "Makush Art Gallery & Italian Restaurant",
                    "Lucy Lounge & Restaurant",
                    "Fendika Azmari Bet",
                    "Five Loaves",
                    "Kaffa House",
                    "Bait Al Mandi",
                    "Kategna Restaurant",
                    "Sishu",
                    "Aladdin Restaurant",
                    "Gazebo Restaurant on the Park",
                    "Cascara Coffee & Cocktails",
                ],
                [
                    (
                        SightsAndLandmarks,
                        &[
                            "Explore the Danakil Depression in 6 Days",
                            "Day trip to Adadi Mariyam and Melka kunture",
                            "Full Day Private Tour of to Meskel Square",
                            "Visit The Mausoleum of Menelik II",
                            "Full Day Tour of Yekatit 12 Martyrs Square with Hotel Pickup and Dropoff",
                            "Addis Ababa Guided City Tour With Airport & Hotel Pick Up",
                            "Visit Karls Square",
                        ],
                    ),
                    (
                        History,
                        &[
                            "Discover Red Terror Martyrs Memorial Museum",
                            "Full Day Tour of National Museum of Ethiopia with Hotel Pickup and Dropoff",
                            "Addis Ababa Ethnological Museum Tour",
                            "Visit to Entoto Maryam Church",
                            "Learn about nature and Ethiopian history and culture at Unity Park Addis Ababa with Hotel Pickup & Dropoff Included",
                            "Addis Ababa City Tour to Menelik palace",
                            "Discover the Specialty PanAfrican museum located in Addis Ababas historic Arada district Expect a truly one of a kind memorable experience",
                            "Addis Ababa Guided Museum Tour With Hotel Pick Up",
                            "See Zoma Museum",
                        ],
                    ),
                    (
                        NatureAndWildlife,
                        &[
                            "Mount Entoto Full Day Tour with Hotel Pickup and Dropoff",
                            "Day Trip To Menagesha Suba Forest",
                            "Day Trip To Gullele Botanical Garden",
                        ],
                    ),
                    (
                        Adventure,
                        &[
                            "Horseriding experience in the hills surrounding Addis Ababa Come to the ranch to explore nature in its best on trails through the forest learn how to ride or simply get away from the city for a bit Nestled in the Sululta hills 4 kilometers above the capital city with 5 hectares of land",
                            "Some outdoor activities with Abyssinia Balloon rides",
                            "Adventure Theme Park at Kuriftu Resort Entoto",
                            "Addis Ababa City Danakil Depression Tours",
                            "Rent a car and drive to Portuguese Bridge (110km from Addis Ababa)",
                            "Ethio North Trekking Come and discover the thrills of Ethiopia with Bale Mountains",
                        ],
                    ),
                ],
            ),
            entry(
                "Mekele",
                &[
                    "Axum Hotel",
                    "Planet Hotel",
                    "Atse Yohannes Hotel",
                    "Moringa Hotel",
                    "Desta International Hotel",
                    "Mekelle Hotel",
                    "Romanat Hotel",
                ],
                &[
                    "Samiel G/Slasse Gebru Restaurant",
                    "Beefmn Garden Bar and Restaurant",
                    "Karibu Kitchen",
                    "Geza Gerlase # 1",
                    "Grand Awash 2 Bar & Restaurant",
                    "Yordanos Restaurant",
                    "Elaz Coffee",
                    "Abay Cultural Restaurant",
                    "Makale Chinese Restaurant",
                    "Day to Day Traditional Restaurant",
                    "Natna Spot",
                ],
                [
                    (SightsAndLandmarks, &["Go see The Martyrs Memorial Monument"]),
                    (History, &["Visit to Emperor Yohannes IV Palace"]),
                    (
                        NatureAndWildlife,
                        &[
                            "Two Days Tour of Gheralta Rock",
                            "Four (4) Days tour of Lake Assale",
                        ],
                    ),
                    (Adventure, &["Ethio Cycling Tour"]),
                ],
            ),
            entry(
                "Axum",
                &[
                    "Africa Hotel",
                    "Armah Hotel",
                    "Consolar International Hotel",
                    "Brana Hotel",
                    "Axum Touring Hotel",
                ],
                &[
                    "Africa Hotel",
                    "Central Cafe Pastry and Restaurant",
                    "AB Cultural Restaurant",
                    "Abinet Hotel",
                    "Aksum Classical Restaurant",
                    "Lucy Cultural Restaurant",
                    "Lucy Traditional Restaurant",
                    "Antica Special Cultural Restaurant",
                    "Kuda Juice & Pizzeria",
                    "AB Restaurant",
                    "Yeha Hotel",
                ],
                [
                    (
                        SightsAndLandmarks,
                        &[
                            "Explore North Ethiopia Discover King Ezanas Inscription",
                            "Explore North Ethiopia Visit Church of Our Lady Mary of Zion",
                            "Discover The Tombs of Kings Kaleb and Gebre Meskal",
                        ],
                    ),
                    (
                        History,
                        &[
                            "Day Trip in Axum to discover the remains of once powerful royal capital contain impressive tombs and stelae Ruins of Aksum",
                            "Explore Church of Our Lady Mary of Zion rumored to be the hiding place of the biblical Lost Ark",
                            "Discover Queen of Shebas Palace in Axum tall carved obelisks relics of the ancient Kingdom of Aksum",
                        ],
                    ),
                    (NatureAndWildlife, &[]),
                    (
                        Adventure,
                        &["15 Days trekking To Simen Mountains", "Discover Ezana Park"],
                    ),
                ],
            ),
            entry(
                "Harar",
                &[
                    "Rewda Waber Harari Cultural Guest House",
                    "Wonderland Hotel",
                    "Harar Ras Hotel",
                    "Heritage Plaza Hotel",
                    "Winta Hotel",
                    "Sumeya Hotel",
                ],
                &[
                    "Hirut",
                    "Ras Hotel Restaurant",
                    "Nadia Ousmail Ahmed",
                    "Abdulwasi Adus Cafe",
                    "Fresh Touch Bar & Restaurant",
                ],
                [
                    (SightsAndLandmarks, &["Harrar tour to see Harar Jegol Wall"]),
                    (
                        History,
                        &[
                            "Explore Casa Museo di Rimbaud",
                            "Visit Harar Museum Eastern Ethiopia",
                        ],
                    ),
                    (NatureAndWildlife, &[]),
                    (Adventure, &[]),
                ],
            ),
            entry(
                "Bahirdar",
                &[
                    "Teferi Mokonnen Hotel",
                    "B&B The Annex",
                    "Delano Hotel & Spa",
                    "Jacaranda Hotel",
                    "Addis Amba Hotel",
                    "Wynn Hotel",
                    "Blue Nile Resort",
                    "Rahnile Hotel",
                    "Water Front Hotel",
                    "Lakemark Hotel",
                ],
                &["Bahir Dar Restaurant", "Lemat Restaurant", "Wude Coffee"],
                [
                    (
                        SightsAndLandmarks,
                        &[
                            "Visit Monastery of Debre Mariam",
                            "Visit Azwa Mariam Monastery",
                        ],
                    ),
                    (History, &["Explore Church of Debre Sina Maryam"]),
                    (
                        NatureAndWildlife,
                        &["Bahir Dar Tour of Lake Tana", "Day trip to Blue Nile Falls"],
                    ),
                    (Adventure, &["Bahir Dar Bike Tour"]),
                ],
            ),
            entry(
                "Lalibela",
                &[
                    "Ancient Lalibela Hotel",
                    "Lal Hotel & Spa",
                    "Merkeza Hotel",
                    "Top Twelve Hotel",
                    "Honey Land Hotel",
                    "Holidays Hotel",
                ],
                &[
                    "Old Abyssinia Lodge and Restaurant",
                    "Jerusalem Guest House",
                    "Roha Hotel Restaurant",
                    "Mountain View Hotel Bar & Restaurant",
                    "Lasta Café",
                    "Terrace Traditional Hall",
                    "Unique Restaurant",
                    "Seven Olives Hotel Restaurant",
                    "Segenet Cafe and Resturant",
                    "Sora Lodge Lalibela Restaurant",
                    "Alem Cooking Class Bar and Restaurant",
                    "Selina Restaurant",
                    "Maribela Hotel, Restaurant & Lounge",
                    "Zan-Seyoum Restaurant",
                    "Fikr Juice House",
                    "Ben Abeba",
                    "Kana Restaurant and Bar",
                    "Tg home style lalibela restaurant",
                    "Bisrat cafe",
                    "Panoramic View Hotel",
                    "Haset restaurant",
                    "Ma'ed Lalibela Restaurant",
                    "Kana Restuarant and Bar",
                ],
                [
                    (
                        SightsAndLandmarks,
                        &[
                            "Lalibela Rock Churches Guided Tour",
                            "Visit Monastery of Naakuto Laab",
                            "Visit The Tomb of Adam",
                            "Visit Bilbala St George Rock Hewn Church",
                            "Visit Biete Medhane Alem",
                            "Visit Rock Hewn Churches",
                        ],
                    ),
                    (
                        History,
                        &[
                            "Visit The church of Yemrehanna Kristos is one of Ethiopias best preserved late Axumite churches",
                            "3 days tour to Lalibela Asheton Maryam Monastery",
                        ],
                    ),
                    (
                        NatureAndWildlife,
                        &["4 Day Abune Yosef Conservation Area Trekking Tour from Lalibela"],
                    ),
                    (
                        Adventure,
                        &[
                            "Adventure Theme Park at Kuriftu Resort Entoto",
                            "15 Days trekking To Simen Mountains",
                            "Lalibela Eco Trekking Tours",
                            "Some outdoor activities with Abyssinia Balloon rides",
                        ],
                    ),
                ],
            ),
            entry(
                "Adigrat",
                &[
                    "Eve Hotel",
                    "Hohoma Hotel",
                    "Gebreselassie Hotel",
                    "Canaan Hotel",
                    "Agamos Hotel",
                    "Agoro Lodge",
                ],
                &["Geza Gerelase Hotel"],
                [
                    (SightsAndLandmarks, &[]),
                    (
                        History,
                        &["Two Days Trip to learn about Monastery of Debre Damo"],
                    ),
                    (NatureAndWildlife, &[]),
                    (Adventure, &[]),
                ],
            ),
        ],
    }
}
