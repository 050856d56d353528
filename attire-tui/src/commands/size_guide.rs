// File: attire-tui/src/commands/size_guide.rs

use std::str::FromStr;
use std::sync::Arc;

use attire_common::Error;
use attire_common::models::{Gender, Measurements, Region};
use attire_core::services::sizing::Recommendation;

use crate::render;
use crate::route::Route;
use crate::tui_module::TuiModule;

pub fn handle_size_guide_command(args: &[&str], module: &Arc<TuiModule>) -> String {
    ensure_on_size_guide(module);

    match args {
        [] | ["chart"] => render_size_guide_page(module),
        ["regions"] => {
            let mut out = String::from("Regions with size charts:\n");
            for region in module.charts.regions() {
                out.push_str(&format!("  {}\n", region));
            }
            out
        }
        ["region", rest @ ..] => {
            let wanted = rest.join(" ");
            match Region::from_str(&wanted) {
                Ok(region) => {
                    module.size_guide.lock().unwrap().region = region;
                    render_size_guide_page(module)
                }
                Err(_) => format!(
                    "Unknown region '{}'. 'sizeguide regions' lists the charts we have.",
                    wanted
                ),
            }
        }
        ["gender", value] => match Gender::from_str(value) {
            Ok(gender) => {
                module.size_guide.lock().unwrap().gender = gender;
                render_size_guide_page(module)
            }
            Err(_) => "Usage: sizeguide gender <women|men>".to_string(),
        },
        ["find", measurements @ ..] => find_size(measurements, module),
        _ => "Usage: sizeguide [chart | regions | region <region> | gender <w|m> | find <chest> [waist hips inseam shoulder]]"
            .to_string(),
    }
}

pub fn render_size_guide_page(module: &Arc<TuiModule>) -> String {
    let state = *module.size_guide.lock().unwrap();
    match module.charts.chart(state.region, state.gender) {
        Some(bands) => {
            let mut out = render::chart_table(state.region.as_str(), state.gender, bands);
            out.push_str(
                "\n'sizeguide region <region>' and 'sizeguide gender <w|m>' switch charts.\n",
            );
            out.push_str("'sizeguide find <chest>' recommends your size.\n");
            out
        }
        None => format!(
            "No {} chart for {} yet.",
            state.gender, state.region
        ),
    }
}

/// Size recommendation from measurements. Only the chest measurement is used
/// by the lookup; the rest are accepted to match the converter form.
fn find_size(args: &[&str], module: &Arc<TuiModule>) -> String {
    let field = |i: usize| args.get(i).copied().unwrap_or_default().to_string();
    let form = Measurements {
        chest: field(0),
        waist: field(1),
        hips: field(2),
        inseam: field(3),
        shoulder: field(4),
    };
    if form.chest.is_empty() {
        return "Please enter your chest measurement".to_string();
    }
    let state = *module.size_guide.lock().unwrap();
    match module.charts.recommend(state.region, state.gender, &form.chest) {
        Ok(Recommendation::Band(band)) => format!(
            "Your US size is approximately {}, which corresponds to {} in {} sizing.",
            band.us, band.native, state.region
        ),
        Ok(Recommendation::Undetermined) => {
            "We couldn't determine your size with the given measurements. Please check your measurements or contact us for assistance."
                .to_string()
        }
        Err(Error::Parse(_)) => "Please enter your chest measurement".to_string(),
        Err(e) => format!("{}", e),
    }
}

fn ensure_on_size_guide(module: &Arc<TuiModule>) {
    if module.current_route() != Route::SizeGuide {
        module.navigate(Route::SizeGuide);
    }
}
