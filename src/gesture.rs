/// Eventos discretos do ponteiro sobre o canvas, já traduzidos para
/// coordenadas de célula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Botão primário pressionado sobre a célula (row, col).
    Pressed { row: usize, col: usize },
    /// Ponteiro entrou na célula (row, col).
    Entered { row: usize, col: usize },
    /// Botão primário solto, em qualquer lugar da janela.
    Released,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Painting,
}

/// Interpreta a sequência de eventos do ponteiro. Um traço começa no
/// `Pressed`, segue pelas células visitadas enquanto o botão fica
/// pressionado e termina no `Released`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gesture {
    state: GestureState,
}

impl Gesture {
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Processa um evento e devolve a célula a pintar, se o evento fizer
    /// parte de um traço. Eventos `Entered` repetidos pintam de novo; quem
    /// chama só deve emitir `Entered` quando a célula sob o ponteiro muda.
    pub fn handle(&mut self, event: PointerEvent) -> Option<(usize, usize)> {
        match event {
            PointerEvent::Pressed { row, col } => {
                self.state = GestureState::Painting;
                Some((row, col))
            }
            PointerEvent::Entered { row, col } => match self.state {
                GestureState::Painting => Some((row, col)),
                GestureState::Idle => None,
            },
            PointerEvent::Released => {
                self.state = GestureState::Idle;
                None
            }
        }
    }
}
