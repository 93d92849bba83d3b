// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, button, column, container, pick_list, row, slider, stack, text, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::ScanPreset;
use crate::ui::primitives::{ShieldScan, view_shield_scan};
use crate::ui::{theme, widgets};

/// Square layout size of the shield canvas
const SHIELD_SIZE: f32 = 320.0;

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let scan = &self.ui.scan;
        let settings = &self.core.settings;

        let shield = view_shield_scan(
            ShieldScan::new(
                scan.display_percent(),
                theme::scan_color(settings.scan.color),
                scan.pulse,
            ),
            SHIELD_SIZE,
        );

        let restart_label = if scan.completed { "Scan again" } else { "Restart" };
        let restart = button(text(restart_label).size(14))
            .on_press(Message::RestartScan)
            .style(theme::primary_button)
            .padding([8, 24]);

        let color_picker = pick_list(
            ScanPreset::all(),
            Some(settings.scan.color),
            Message::UpdateScanColor,
        )
        .text_size(13);

        let cycle_control = column![
            text(format!("Pulse cycle: {} ms", settings.scan.cycle_ms))
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            slider(
                600u32..=3000u32,
                settings.scan.cycle_ms as u32,
                Message::UpdateCycleMs,
            )
            .step(100u32),
        ]
        .spacing(4);

        let toggles = row![
            toggler(settings.display.dark_mode)
                .label("Dark mode")
                .on_toggle(Message::UpdateDarkMode),
            toggler(settings.display.power_saving_mode)
                .label("Power saving")
                .on_toggle(Message::UpdatePowerSavingMode),
        ]
        .spacing(16);

        let controls = container(
            column![
                row![restart, Space::new().width(Fill), color_picker].align_y(Alignment::Center),
                cycle_control,
                toggles,
            ]
            .spacing(12),
        )
        .style(theme::control_card)
        .padding(16)
        .width(SHIELD_SIZE + 40.0);

        let content = container(
            column![shield, controls]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .style(theme::main_content)
        .center_x(Fill)
        .center_y(Fill);

        match &self.ui.toast {
            Some(toast) => stack![
                content,
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .height(Fill)
                    .align_x(Alignment::Center)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .padding(24),
            ]
            .into(),
            None => content.into(),
        }
    }
}
