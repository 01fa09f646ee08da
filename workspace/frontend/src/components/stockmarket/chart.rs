use arcade_common::{
    axis_range, chart_inputs, has_chart_data, shape_points, AxisRange, PriceBook, PricePoint,
};
use plotly::common::{Line, Marker, Mode};
use plotly::layout::{Axis, Margin};
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::store::PriceStoreContext;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(root: &HtmlElement, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Plot every recorded price instead of the last ten.
    #[prop_or_default]
    pub show_full_history: bool,
    #[prop_or(300)]
    pub height: u32,
    /// Also re-render when the symbol's live price changes.
    #[prop_or_default]
    pub live_update: bool,
}

#[function_component(StockChart)]
pub fn stock_chart(props: &Props) -> Html {
    let store = use_context::<PriceStoreContext>();
    let symbol = props.symbol.clone();

    let inputs = match &store {
        Some(store) => chart_inputs(store, &symbol, props.show_full_history, props.live_update),
        None => chart_inputs(&PriceBook::default(), &symbol, props.show_full_history, props.live_update),
    };

    let points = use_memo(inputs, |inputs| {
        log::trace!("Reshaping {} prices for {}", inputs.history.len(), inputs.symbol);
        shape_points(&inputs.history, inputs.full_history)
    });

    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(format!("{} Price History", symbol)));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{title}</h3>
                <div style={format!("width: 100%; height: {}px;", props.height)}>
                    {if has_chart_data(&points) {
                        html! {
                            <PriceLinePlot
                                points={(*points).clone()}
                                range={axis_range(&points)}
                                height={props.height}
                            />
                        }
                    } else {
                        html! {
                            <div class="flex h-full items-center justify-center">
                                <p class="text-gray-500">{"Loading price history..."}</p>
                            </div>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlotProps {
    points: Vec<PricePoint>,
    range: AxisRange,
    height: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlotConfig {
    responsive: bool,
    display_mode_bar: bool,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn plot_payload(points: &[PricePoint], range: AxisRange, height: u32) -> Result<(JsValue, JsValue, JsValue), serde_wasm_bindgen::Error> {
    let labels: Vec<String> = points.iter().map(|p| p.time.clone()).collect();
    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();

    let trace = Scatter::new(labels, prices)
        .mode(Mode::LinesMarkers)
        .name("Price")
        .line(Line::new().color("#3b82f6").width(2.0))
        .marker(Marker::new().size(6))
        .hover_template("Time: %{x}<br>Price: $%{y:.2f}<extra></extra>");

    let layout = Layout::new()
        .height(height as usize)
        .margin(Margin::new().top(5).right(30).left(40).bottom(30))
        .show_legend(false)
        .y_axis(Axis::new().range(vec![range.min, range.max]));

    let config = PlotConfig {
        responsive: true,
        display_mode_bar: false,
    };

    let data = js_sys::Array::new();
    data.push(&to_js(&trace)?);

    Ok((data.into(), to_js(&layout)?, to_js(&config)?))
}

#[function_component(PriceLinePlot)]
fn price_line_plot(props: &PlotProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.points.clone(), props.range, props.height),
        |(container_ref, points, range, height)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                match plot_payload(points, *range, *height) {
                    Ok((data, layout, config)) => {
                        log::debug!("Plotting {} price points in [{}, {}]", points.len(), range.min, range.max);
                        newPlot(&element, data, layout, config);
                    }
                    Err(e) => log::error!("Failed to build price chart: {}", e),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width: 100%; height: 100%;"></div>
    }
}
