use crate::input::keyboard::Key;
use crate::video::assets::Shading;

/// Cycles the shading mode.
pub const SHADING_KEY: Key = Key::M;
/// Cycles the face mode, honored while `Task::MeshFaces` is selected.
pub const FACE_KEY: Key = Key::F;
/// Cycles the triangle assembly, honored while `Task::Decomposition` is selected.
pub const ASSEMBLY_KEY: Key = Key::Right;
/// Requests the main loop to terminate.
pub const QUIT_KEY: Key = Key::Escape;

/// A mode with a fixed cyclic order of values.
pub trait Cycle: Copy + PartialEq + 'static {
    /// Every value, in cycling order.
    const ALL: &'static [Self];

    /// Returns the value following `self`, wrapping to the first one.
    fn next(self) -> Self {
        let len = Self::ALL.len();
        match Self::ALL.iter().position(|&v| v == self) {
            Some(i) => Self::ALL[(i + 1) % len],
            None => Self::ALL[0],
        }
    }
}

impl Cycle for Shading {
    const ALL: &'static [Shading] = &[Shading::Flat, Shading::Smooth];
}

/// How the faces of the mesh figure are rasterized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaceMode {
    /// Every face filled.
    Normal,
    /// Back faces culled, front faces drawn as their vertices only.
    VerticesFront,
    /// Back faces as gray wireframe underneath filled front faces.
    FilledFrontWireBack,
    /// Every face as wireframe.
    Wireframe,
}

impl Cycle for FaceMode {
    const ALL: &'static [FaceMode] = &[
        FaceMode::Normal,
        FaceMode::VerticesFront,
        FaceMode::FilledFrontWireBack,
        FaceMode::Wireframe,
    ];
}

/// How the triangle decomposition of figure 2 is assembled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assembly {
    Triangles,
    Strip,
    Fan,
}

impl Cycle for Assembly {
    const ALL: &'static [Assembly] = &[Assembly::Triangles, Assembly::Strip, Assembly::Fan];
}

/// The figures selectable with the digit keys, in key order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Task {
    /// 1: vertices of the regular n-gon.
    NgonPoints,
    /// 2: outline of the regular n-gon.
    NgonOutline,
    /// 3: open polyline of figure 1.
    Polyline,
    /// 4: closed outline of figure 2.
    Outline,
    /// 5: triangle decomposition of figure 2, under the current `Assembly`.
    Decomposition,
    /// 6: the n-gon as a triangle fan around the origin.
    NgonFan,
    /// 7: the triangulated mesh of figure 3.
    Mesh,
    /// 8: the triangulated mesh of figure 3, with a switchable `FaceMode`.
    MeshFaces,
}

impl Task {
    pub const ALL: [Task; 8] = [
        Task::NgonPoints,
        Task::NgonOutline,
        Task::Polyline,
        Task::Outline,
        Task::Decomposition,
        Task::NgonFan,
        Task::Mesh,
        Task::MeshFaces,
    ];

    /// Returns the task bound to digit `index`, which must be in `1..=8`.
    pub fn from_index(index: u32) -> Option<Task> {
        if index >= 1 && index as usize <= Task::ALL.len() {
            Some(Task::ALL[index as usize - 1])
        } else {
            None
        }
    }

    /// Returns the digit this task is bound to.
    pub fn index(self) -> u32 {
        Task::ALL
            .iter()
            .position(|&v| v == self)
            .map_or(0, |i| i as u32 + 1)
    }
}

/// What the host loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Response {
    Continue,
    Quit,
}

/// Everything the shape demo renders from. Mutated by key presses only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub task: Task,
    pub shading: Shading,
    pub face: FaceMode,
    pub assembly: Assembly,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            task: Task::NgonPoints,
            shading: Shading::Flat,
            face: FaceMode::Normal,
            assembly: Assembly::Triangles,
        }
    }
}

impl RenderState {
    /// Selects the task bound to digit `index`. Returns false and leaves the state
    /// untouched if `index` is out of `1..=8`.
    pub fn select(&mut self, index: u32) -> bool {
        match Task::from_index(index) {
            Some(task) => {
                self.task = task;
                true
            }
            None => false,
        }
    }

    /// Applies a key press. Unbound keys, and mode keys pressed while their task is not
    /// selected, are ignored.
    pub fn on_key_pressed(&mut self, key: Key) -> Response {
        if key == QUIT_KEY {
            info!("Quit requested.");
            return Response::Quit;
        }

        if let Some(digit) = key.digit() {
            if self.select(u32::from(digit)) {
                info!("Selected task {} ({:?}).", digit, self.task);
            }
        } else if key == SHADING_KEY {
            self.shading = self.shading.next();
            info!("Shading mode: {:?}.", self.shading);
        } else if key == FACE_KEY && self.task == Task::MeshFaces {
            self.face = self.face.next();
            info!("Face mode: {:?}.", self.face);
        } else if key == ASSEMBLY_KEY && self.task == Task::Decomposition {
            self.assembly = self.assembly.next();
            info!("Triangle assembly: {:?}.", self.assembly);
        }

        Response::Continue
    }
}
