pub trait F32Ext
where
    Self: Sized,
{
    fn saturate(self) -> Self;
}

impl F32Ext for f32 {
    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}
