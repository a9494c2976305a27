use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme,
};
use labcore::model::{AverageMatrix, Material, Terrain};
use labcore::session::{Action, KinematicField, SessionState};
use labcore::telemetry::ActionStats;

fn main() -> iced::Result {
    iced::application(Bench::boot, Bench::update, Bench::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Bench) -> String {
    "Incline Lab Bench".into()
}

fn application_theme(_: &Bench) -> Theme {
    Theme::Light
}

const SERIES_COLORS: [Color; 3] = [
    Color::from_rgb(0.29, 0.75, 0.75),
    Color::from_rgb(0.60, 0.40, 1.00),
    Color::from_rgb(1.00, 0.62, 0.25),
];

#[derive(Debug)]
struct Bench {
    session: SessionState,
    stats: ActionStats,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    CellEdited(Terrain, Material, String),
    ComputeAverages,
    ResetReadings,
    ResetAverages,
    KinematicEdited(KinematicField, String),
    ComputeKinematics,
    ResetKinematics,
    TrialCountEdited(String),
    TrialEdited(usize, String),
    ComputeTrialAverage,
    ResetTrials,
}

fn to_action(message: Message) -> Action {
    match message {
        Message::CellEdited(terrain, material, value) => Action::EditCell {
            terrain,
            material,
            value,
        },
        Message::ComputeAverages => Action::ComputeAverages,
        Message::ResetReadings => Action::ResetReadings,
        Message::ResetAverages => Action::ResetAverages,
        Message::KinematicEdited(field, value) => Action::EditKinematic { field, value },
        Message::ComputeKinematics => Action::ComputeKinematics,
        Message::ResetKinematics => Action::ResetKinematics,
        Message::TrialCountEdited(value) => Action::SetTrialCount(value),
        Message::TrialEdited(index, value) => Action::EditTrial { index, value },
        Message::ComputeTrialAverage => Action::ComputeTrialAverage,
        Message::ResetTrials => Action::ResetTrials,
    }
}

impl Bench {
    fn boot() -> (Self, Task<Message>) {
        (
            Bench {
                session: SessionState::new(),
                stats: ActionStats::new(),
                status: "Enter readings, then compute.".into(),
                history: Vec::new(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        let action = to_action(message.clone());
        state.stats.record(&action);

        if let Err(err) = state.session.apply(action) {
            state.status = format!("Input error: {err}");
            return Task::none();
        }

        match message {
            Message::ComputeAverages => {
                state.note("Averages recomputed".into());
            }
            Message::ComputeKinematics => {
                let results = state.session.results;
                state.note(format!(
                    "Run computed: a {:.2}, d {:.2}, rev {:.2}",
                    results.acceleration, results.distance, results.revolutions
                ));
            }
            Message::ComputeTrialAverage => {
                state.note(format!(
                    "Trial average {:.2} over {} trials",
                    state.session.trials.average(),
                    state.session.trials.len()
                ));
            }
            Message::ResetReadings => state.note("Form cleared".into()),
            Message::ResetAverages => state.note("Table cleared".into()),
            Message::ResetKinematics => state.note("Run inputs cleared".into()),
            Message::ResetTrials => state.note("Trials cleared".into()),
            _ => {}
        }

        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let kinematics_card = column![
            text("Step 1: Single Run").size(22),
            text_input("Theta (degrees)", state.session.kinematics.theta.raw())
                .on_input(|value| Message::KinematicEdited(KinematicField::Theta, value))
                .padding(6),
            text_input("Time (seconds)", state.session.kinematics.time.raw())
                .on_input(|value| Message::KinematicEdited(KinematicField::Time, value))
                .padding(6),
            text_input("Radius", state.session.kinematics.radius.raw())
                .on_input(|value| Message::KinematicEdited(KinematicField::Radius, value))
                .padding(6),
            row![
                button("Calculate")
                    .on_press(Message::ComputeKinematics)
                    .padding(10),
                button("Reset").on_press(Message::ResetKinematics).padding(10),
            ]
            .spacing(10),
            text(format!(
                "Acceleration: {:.2}",
                state.session.results.acceleration
            ))
            .size(14),
            text(format!("Distance: {:.2}", state.session.results.distance)).size(14),
            text(format!(
                "Revolutions: {:.2}",
                state.session.results.revolutions
            ))
            .size(14),
        ]
        .spacing(8);

        let trial_inputs = state.session.trials.values().iter().enumerate().fold(
            Column::new().spacing(6),
            |col, (index, value)| {
                col.push(
                    text_input(&format!("Trial {}", index + 1), value.raw())
                        .on_input(move |value| Message::TrialEdited(index, value))
                        .padding(6),
                )
            },
        );

        let trials_card = column![
            text("Step 2: Repeated Trials").size(22),
            text_input("Number of trials", state.session.trials.declared_raw())
                .on_input(Message::TrialCountEdited)
                .padding(6),
            trial_inputs,
            row![
                button("Submit Trials")
                    .on_press(Message::ComputeTrialAverage)
                    .padding(10),
                button("Reset").on_press(Message::ResetTrials).padding(10),
            ]
            .spacing(10),
            text(format!(
                "Average Value: {:.2}",
                state.session.trials.average()
            ))
            .size(14),
        ]
        .spacing(8);

        let matrix_inputs = Terrain::ALL.iter().fold(
            Column::new().spacing(6),
            |col, &terrain| {
                Material::ALL.iter().fold(col, |col, &material| {
                    col.push(
                        text_input(
                            &format!("{} - {}", terrain.label(), material.label()),
                            state.session.readings.get(terrain, material).raw(),
                        )
                        .on_input(move |value| Message::CellEdited(terrain, material, value))
                        .padding(6),
                    )
                })
            },
        );

        let matrix_card = column![
            text("Step 3: Terrain / Material Readings").size(22),
            matrix_inputs,
            row![
                button("Calculate Averages")
                    .on_press(Message::ComputeAverages)
                    .padding(10),
                button("Reset Form").on_press(Message::ResetReadings).padding(10),
                button("Reset Table").on_press(Message::ResetAverages).padding(10),
            ]
            .spacing(10),
        ]
        .spacing(8);

        let form_column = column![kinematics_card, trials_card, matrix_card]
            .spacing(20)
            .padding(16)
            .width(Length::Fixed(380.0));

        let header = row![
            text("Terrain Type").size(14).width(Length::FillPortion(1)),
            text(Material::One.label()).size(14).width(Length::FillPortion(1)),
            text(Material::Two.label()).size(14).width(Length::FillPortion(1)),
            text(Material::Three.label()).size(14).width(Length::FillPortion(1)),
        ]
        .spacing(8);

        let table = Terrain::ALL.iter().fold(
            Column::new().spacing(4).push(header),
            |col, &terrain| {
                let cells = state.session.averages.row(terrain);
                col.push(
                    row![
                        text(terrain.label()).size(14).width(Length::FillPortion(1)),
                        text(format!("{:.2}", cells[0]))
                            .size(14)
                            .width(Length::FillPortion(1)),
                        text(format!("{:.2}", cells[1]))
                            .size(14)
                            .width(Length::FillPortion(1)),
                        text(format!("{:.2}", cells[2]))
                            .size(14)
                            .width(Length::FillPortion(1)),
                    ]
                    .spacing(8),
                )
            },
        );

        let legend = Material::ALL.iter().enumerate().fold(
            Column::new().spacing(2),
            |col, (index, material)| {
                col.push(
                    text(format!("— {}", material.label()))
                        .size(12)
                        .color(SERIES_COLORS[index]),
                )
            },
        );

        let chart = Canvas::new(AverageChart::new(&state.session.averages))
            .width(Length::Fill)
            .height(Length::Fixed(260.0));

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let (edits, computes, resets) = state.stats.snapshot();

        let results_column = column![
            text("Average Values").size(22),
            table,
            text("Comparison Chart").size(22),
            legend,
            chart,
            text(&state.status).size(14),
            text(format!(
                "Session actions: {} edits / {} computes / {} resets",
                edits, computes, resets
            ))
            .size(12),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(100.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![scrollable(form_column).height(Length::Fill), results_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(10);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn note(&mut self, entry: String) {
        self.status = entry.clone();
        self.push_history(entry);
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

/// Three-series line chart over the terrain categories, one polyline per
/// material, values taken from the averages matrix.
#[derive(Clone)]
struct AverageChart {
    series: [[f64; 3]; 3],
}

impl AverageChart {
    fn new(averages: &AverageMatrix) -> Self {
        let mut series = [[0.0; 3]; 3];
        for material in Material::ALL {
            series[material.index()] = averages.series(material);
        }
        Self { series }
    }
}

impl canvas::Program<Message> for AverageChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.97, 0.97, 0.97),
        );

        let left = 24.0;
        let right = bounds.width - 24.0;
        let top = 16.0;
        let bottom = bounds.height - 20.0;

        let min = self
            .series
            .iter()
            .flatten()
            .cloned()
            .fold(f64::INFINITY, f64::min)
            .min(0.0);
        let max = self
            .series
            .iter()
            .flatten()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(1e-6);

        let x_at = |category: usize| left + (right - left) * (category as f32 / 2.0);
        let y_at = |value: f64| {
            let normalized = ((value - min) / range) as f32;
            bottom - normalized * (bottom - top)
        };

        let axes = Path::new(|builder| {
            builder.move_to(Point::new(left, top));
            builder.line_to(Point::new(left, bottom));
            builder.line_to(Point::new(right, bottom));
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.55, 0.55, 0.6))
                .with_width(1.0),
        );

        for category in 0..3 {
            let x = x_at(category);
            let tick = Path::new(|builder| {
                builder.move_to(Point::new(x, top));
                builder.line_to(Point::new(x, bottom));
            });
            frame.stroke(
                &tick,
                Stroke::default().with_color(Color::from_rgb(0.85, 0.85, 0.88)),
            );
        }

        for (index, values) in self.series.iter().enumerate() {
            let color = SERIES_COLORS[index];
            let path = Path::new(|builder| {
                for (category, &value) in values.iter().enumerate() {
                    let point = Point::new(x_at(category), y_at(value));
                    if category == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(&path, Stroke::default().with_width(2.5).with_color(color));

            for (category, &value) in values.iter().enumerate() {
                let marker = Path::new(|builder| {
                    builder.circle(Point::new(x_at(category), y_at(value)), 3.0)
                });
                frame.fill(&marker, color);
            }
        }

        vec![frame.into_geometry()]
    }
}
