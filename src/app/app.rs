use eframe::{App as EguiApp, Frame};
use eframe::egui::{Button, CentralPanel, Color32, ColorImage, Context, Event, PointerButton, Pos2, Rect, Response, RichText, Sense, SidePanel, TextureId, TextureOptions, Ui, Vec2, Visuals};
use crate::app::color_input::*;
use crate::constants::*;
use crate::gesture::{Gesture, PointerEvent};
use crate::grid::Grid;
use crate::render::*;
use crate::types::CellColor;

pub struct App {
    grid: Grid,
    active_color: String,

    gesture: Gesture,
    hovered_cell: Option<(usize, usize)>,

    color_input: ColorInputData,

    render: Render,
    image: ColorImage,
}

impl Default for App {
    fn default() -> Self {
        let render = Render::default();

        let buffer = render.buffer.clone();
        let size = [render.buffer_width, render.buffer_height];
        let image = ColorImage::from_rgba_premultiplied(size, &buffer);

        let mut obj = Self {
            grid: Grid::default(),
            active_color: DEFAULT_COLOR_HEX.to_string(),

            gesture: Gesture::default(),
            hovered_cell: None,

            color_input: ColorInputData::default(),

            render,
            image,
        };

        obj.redraw();

        obj
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.ui(ctx);
    }
}

impl App {
    /// Monta os painéis de um quadro. Os testes dirigem a interface por
    /// aqui, num `Context` sem janela.
    pub fn ui(&mut self, ctx: &Context) {
        SidePanel::right("side_panel")
            .exact_width(GUI_SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                self.side_panel_content(ui);
            });

        CentralPanel::default()
            .show(ctx, |ui| {
                self.central_panel_content(ui);
            });

        ctx.set_visuals(Visuals::light());
    }

    /// Rasteriza a grade e atualiza a imagem exibida no canvas.
    pub fn redraw(&mut self) {
        self.render.render(&self.grid);

        let buffer = self.render.buffer.clone();
        let size = [self.render.buffer_width, self.render.buffer_height];
        self.image = ColorImage::from_rgba_premultiplied(size, &buffer);
    }

    /// Cor ativa como `Color32`, para tingir o título e o botão de reinício.
    fn active_color32(&self) -> Color32 {
        CellColor::from_hex(&self.active_color)
            .unwrap_or(CellColor::WHITE)
            .to_color32()
    }

    pub fn side_panel_content(&mut self, ui: &mut Ui) {
        let mut redraw = false;

        ui.add_space(GUI_CANVAS_PADDING);
        ui.heading(
            RichText::new("B4F PixelArt")
                .color(self.active_color32())
                .size(28.0),
        );

        ui.separator();

        if let Some(hex) = color_input(ui, &mut self.color_input) {
            self.active_color = hex;
        }

        ui.separator();

        let reset_button = Button::new(RichText::new("Reset").color(Color32::WHITE))
            .fill(self.active_color32())
            .min_size(Vec2::new(GUI_HEX_INPUT_WIDTH, 0.0));
        if ui.add(reset_button).clicked() {
            self.grid = self.grid.reset();
            redraw = true;
        }

        if redraw {
            self.redraw();
        }
    }

    pub fn central_panel_content(&mut self, ui: &mut Ui) {
        let (response, painter) =
            ui.allocate_painter(Vec2::new(GUI_CANVAS_WIDTH, GUI_CANVAS_HEIGHT), Sense::click_and_drag());

        let name = "canvas";
        let options = TextureOptions::default();
        let texture = ui.ctx().load_texture(name, self.image.clone(), options);
        let texture_id = TextureId::from(&texture);
        let uv = Rect {
            min: Pos2::new(0.0, 0.0),
            max: Pos2::new(1.0, 1.0),
        };
        painter.image(texture_id, response.rect, uv, Color32::WHITE);

        self.handle_pointer(ui, &response);
    }

    /// Traduz o ponteiro deste quadro em eventos discretos: as mudanças do
    /// botão primário na ordem real de chegada, depois a entrada de célula
    /// derivada da posição, e pinta as células devolvidas pelo
    /// interpretador de gestos.
    fn handle_pointer(&mut self, ui: &Ui, response: &Response) {
        // durante um arrasto o egui mantém o canvas em hover mesmo com o
        // ponteiro fora do retângulo; só vale a posição dentro dele
        let hovered_cell = response
            .hover_pos()
            .filter(|pos| response.rect.contains(*pos))
            .map(|pos| {
                let relative = pos - response.rect.min;
                canvas_pos_to_cell(relative.x, relative.y)
            });

        let mut events = Vec::new();

        // um toque rápido traz pressão e soltura no mesmo quadro; o fluxo
        // bruto preserva a ordem em que o botão realmente mudou
        for event in ui.input(|i| i.events.clone()) {
            if let Event::PointerButton { pos, button: PointerButton::Primary, pressed, .. } = event {
                if !pressed {
                    // a soltura vale em qualquer lugar da janela
                    events.push(PointerEvent::Released);
                } else if response.rect.contains(pos) {
                    let relative = pos - response.rect.min;
                    let (row, col) = canvas_pos_to_cell(relative.x, relative.y);
                    events.push(PointerEvent::Pressed { row, col });
                }
            }
        }

        // depois dos botões: um arrasto que já trocou de célula no quadro
        // da pressão pinta a célula alcançada
        if let Some((row, col)) = hovered_cell {
            if hovered_cell != self.hovered_cell {
                events.push(PointerEvent::Entered { row, col });
            }
        }

        self.hovered_cell = hovered_cell;

        let mut redraw = false;
        for event in events {
            if let Some((row, col)) = self.gesture.handle(event) {
                self.grid = self.grid.paint_cell(row, col, &self.active_color);
                redraw = true;
            }
        }

        if redraw {
            self.redraw();
        }
    }
}
