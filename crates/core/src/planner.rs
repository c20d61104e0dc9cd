use std::collections::HashSet;

use rand::Rng;

use crate::catalog::ReferenceCatalog;
use crate::error::PlannerError;
use crate::models::{
    DayPlan, ExhaustionPolicy, InterestCategory, Itinerary, ItineraryRequest, PlannerConfig,
    PoolKind,
};

pub fn generate_itinerary(
    catalog: &ReferenceCatalog,
    request: &ItineraryRequest,
    config: &PlannerConfig,
) -> Result<Itinerary, PlannerError> {
    generate_itinerary_with_rng(catalog, request, config, &mut rand::thread_rng())
}

pub fn generate_itinerary_with_rng<R>(
    catalog: &ReferenceCatalog,
    request: &ItineraryRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Itinerary, PlannerError>
where
    R: Rng + ?Sized,
{
    let entry = catalog.resolve_destination(&request.destination)?;
    let interest = InterestCategory::parse(&request.interest)
        .ok_or_else(|| PlannerError::UnknownInterest(request.interest.clone()))?;
    let trip_length = validate_trip_length(request.trip_length, config.max_trip_days)?;

    let activities = entry.activities_for(interest);
    if activities.is_empty() {
        return Err(PlannerError::NoActivitiesAvailable {
            destination: entry.name.clone(),
            interest,
        });
    }

    let mut hotels = SelectionPool::new(&entry.hotels);
    let mut restaurants = SelectionPool::new(&entry.restaurants);

    if config.exhaustion == ExhaustionPolicy::Fail {
        for (pool, kind) in [(&hotels, PoolKind::Hotel), (&restaurants, PoolKind::Restaurant)] {
            if pool.capacity() < trip_length as usize {
                return Err(PlannerError::PoolExhausted {
                    pool: kind,
                    destination: entry.name.clone(),
                    available: pool.capacity(),
                    requested: trip_length,
                });
            }
        }
    }

    let mut days = Vec::with_capacity(trip_length as usize);
    for day in 1..=trip_length {
        let hotel = hotels.draw(rng).to_string();
        let restaurant = restaurants.draw(rng).to_string();
        let activity = activities[rng.gen_range(0..activities.len())].clone();

        days.push(DayPlan {
            day,
            destination: entry.name.clone(),
            hotel,
            restaurant,
            activity,
        });
    }

    Ok(Itinerary {
        destination: entry.name.clone(),
        interest,
        trip_length,
        days,
    })
}

fn validate_trip_length(requested: i64, max: u32) -> Result<u32, PlannerError> {
    u32::try_from(requested)
        .ok()
        .filter(|days| (1..=max).contains(days))
        .ok_or(PlannerError::InvalidTripLength { requested, max })
}

// A refill holds back the previous pick so consecutive days never share one.
struct SelectionPool<'a> {
    options: Vec<&'a str>,
    remaining: Vec<usize>,
    last: Option<usize>,
}

impl<'a> SelectionPool<'a> {
    fn new(options: &'a [String]) -> Self {
        let mut seen = HashSet::new();
        let options = options
            .iter()
            .map(String::as_str)
            .filter(|option| seen.insert(*option))
            .collect::<Vec<_>>();
        let remaining = (0..options.len()).collect();

        Self {
            options,
            remaining,
            last: None,
        }
    }

    fn capacity(&self) -> usize {
        self.options.len()
    }

    fn draw<R>(&mut self, rng: &mut R) -> &'a str
    where
        R: Rng + ?Sized,
    {
        if self.remaining.is_empty() {
            let hold_back = self.last.filter(|_| self.options.len() > 1);
            self.remaining = (0..self.options.len())
                .filter(|index| Some(*index) != hold_back)
                .collect();
        }

        let picked = self.remaining.swap_remove(rng.gen_range(0..self.remaining.len()));
        self.last = Some(picked);
        self.options[picked]
    }
}

pub fn compose_itinerary_text(itinerary: &Itinerary) -> String {
    let rule = "-".repeat(40);
    let mut lines = vec![
        format!("Welcome to your exciting trip to {}!", itinerary.destination),
        "Here's your personalized travel itinerary:".to_string(),
        rule.clone(),
    ];

    for day in &itinerary.days {
        lines.extend([
            format!("Day {} - {} {}:", day.day, day.destination, itinerary.interest),
            format!("Hotel: Stay at {}", day.hotel),
            format!("Lunch: Eat at {}", day.restaurant),
            format!("Activity: {}", day.activity),
            format!("Dinner: Have dinner at {}", day.restaurant),
            rule.clone(),
        ]);
    }

    lines.push("Enjoy your journey and make wonderful memories!".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
